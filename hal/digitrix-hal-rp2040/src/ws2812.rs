//! PIO-based WS2812 transmitter
//!
//! One PIO state machine turns 24-bit GRB words into the WS2812 one-wire
//! waveform. Words are pushed MSB first; the state machine autopulls after
//! 24 bits, so the color has to sit in the top three bytes of each word.
//!
//! Bit timing at 800 kHz, in PIO cycles:
//!
//! ```text
//!          T1   T2    T3
//! "1":  ‾‾‾‾‾‾‾‾‾‾‾‾‾‾|___
//! "0":  ‾‾‾‾|_____________
//!         2     5     3
//! ```

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;

use digitrix_core::traits::PixelSink;

/// WS2812 bit rate
pub const BIT_RATE_HZ: u32 = 800_000;

/// PIO cycles per transmitted bit (T1 + T2 + T3)
pub const CYCLES_PER_BIT: u32 = 2 + 5 + 3;

/// Bits per pixel (no white channel)
pub const BITS_PER_PIXEL: u8 = 24;

/// Clock divider that runs the program at `CYCLES_PER_BIT * BIT_RATE_HZ`
///
/// Computed in kHz; the system clock in Hz does not fit the 24 integer bits.
pub fn clock_divider(sys_clk_hz: u32) -> U24F8 {
    let sys_khz = U24F8::from_num(sys_clk_hz / 1000);
    let bit_khz = U24F8::from_num(BIT_RATE_HZ / 1000 * CYCLES_PER_BIT);
    sys_khz / bit_khz
}

/// WS2812 chain on one PIO state machine
pub struct PioWs2812Sink<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812Sink<'d, PIO, SM> {
    /// Load the program, route `pin` to the state machine and start it
    pub fn new<P: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, P>,
    ) -> Self {
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]", // T3: low, shift next bit
            "    jmp !x do_zero side 1 [1]", // T1: high for every bit
            "do_one:",
            "    jmp bitloop    side 1 [4]", // T2: stay high for a one
            "do_zero:",
            "    nop            side 0 [4]", // T2: drop low for a zero
            ".wrap"
        );

        let installed = common.load_program(&prg.program);
        let data_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pin]);
        cfg.clock_divider = clock_divider(clk_sys_freq());
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<PIO: Instance, const SM: usize> PixelSink for PioWs2812Sink<'_, PIO, SM> {
    /// Blocks while the TX FIFO is full
    fn put_word(&mut self, word: u32) {
        while !self.sm.tx().try_push(word) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_divider() {
        // 125 MHz / (800 kHz * 10) = 15.625
        assert_eq!(clock_divider(125_000_000), U24F8::from_num(15.625));
        // 133 MHz / 8 MHz = 16.625
        assert_eq!(clock_divider(133_000_000), U24F8::from_num(16.625));
    }
}
