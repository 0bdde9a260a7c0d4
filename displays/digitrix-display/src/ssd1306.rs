//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Keeps a page-organized 1-bit framebuffer in RAM and renders glyphs and
//! rectangles into it with `embedded-graphics`.

use core::convert::Infallible;

use digitrix_hal::I2cBus;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{DisplayBackend, DisplayError};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEM_ADDR: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const ENTIRE_ON_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// 1-bit framebuffer, one byte per 8 vertical pixels
struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl FrameBuffer {
    const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let mask = 1 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Negative coordinates are clipped
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: FrameBuffer,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2cBus,
{
    /// Create a new SSD1306 driver at the given 7-bit address
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: FrameBuffer::new(),
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEM_ADDR,
            0x00, // Horizontal addressing
            cmd::SET_START_LINE | 0x00,
            cmd::SET_SEG_REMAP, // Column 127 mapped to SEG0
            cmd::SET_MUX_RATIO,
            (HEIGHT - 1) as u8,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::ENTIRE_ON_RESUME,
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(|_| DisplayError::Communication)
    }

    /// Read back a buffered pixel
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.buffer.pixel(x, y)
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn check_origin(x: u16, y: u16) -> Result<(), DisplayError> {
        if x as usize >= WIDTH || y as usize >= HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        Ok(())
    }
}

impl<I2C> DisplayBackend for Ssd1306<I2C>
where
    I2C: I2cBus,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.buffer.clear();
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        Self::check_origin(x, y)?;
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(
            text,
            Point::new(x as i32, y as i32),
            style,
            Baseline::Top,
        )
        .draw(&mut self.buffer)
        .unwrap_or_else(|never| match never {});
        Ok(())
    }

    fn draw_char(&mut self, x: u16, y: u16, ch: char) -> Result<(), DisplayError> {
        let mut utf8 = [0u8; 4];
        let text: &str = ch.encode_utf8(&mut utf8);
        self.draw_text(x, y, text)
    }

    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        Self::check_origin(x, y)?;
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidCoordinates);
        }
        Rectangle::new(
            Point::new(x as i32, y as i32),
            Size::new(width as u32, height as u32),
        )
        .into_styled(
            PrimitiveStyleBuilder::new()
                .stroke_color(BinaryColor::On)
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside)
                .build(),
        )
        .draw(&mut self.buffer)
        .unwrap_or_else(|never| match never {});
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        // Address window covers the whole panel
        let window: [u8; 6] = [
            cmd::SET_COL_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ];
        for c in window {
            self.command(c)?;
        }

        for page in 0..PAGES {
            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer.pages[page]);
            self.i2c
                .write(self.address, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    /// Mock I2C bus recording every write
    struct MockBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail: false,
            }
        }
    }

    impl I2cBus for MockBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.writes.push((address, data.to_vec()));
            Ok(())
        }
    }

    fn lit_pixels<I2C: I2cBus>(display: &Ssd1306<I2C>) -> usize {
        let mut count = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if display.pixel(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_init_sends_commands() {
        let mut display = Ssd1306::new(MockBus::new(), SSD1306_ADDR);
        display.init().unwrap();

        let bus = display.release();
        assert!(!bus.writes.is_empty());
        assert!(bus
            .writes
            .iter()
            .all(|(addr, data)| *addr == SSD1306_ADDR && data.len() == 2 && data[0] == 0x00));
        assert_eq!(bus.writes.first().unwrap().1[1], cmd::DISPLAY_OFF);
        assert_eq!(bus.writes.last().unwrap().1[1], cmd::DISPLAY_ON);
    }

    #[test]
    fn test_rect_outline() {
        let mut display = Ssd1306::new(MockBus::new(), SSD1306_ADDR);
        display.draw_rect(54, 4, 20, 20).unwrap();

        // Corners
        assert!(display.pixel(54, 4));
        assert!(display.pixel(73, 4));
        assert!(display.pixel(54, 23));
        assert!(display.pixel(73, 23));
        // Edges
        assert!(display.pixel(64, 4));
        assert!(display.pixel(54, 14));
        // Interior and outside stay dark
        assert!(!display.pixel(64, 14));
        assert!(!display.pixel(53, 4));
        assert!(!display.pixel(74, 23));

        // Outline of a 20x20 box: 4 * 20 - 4 pixels
        assert_eq!(lit_pixels(&display), 76);
    }

    #[test]
    fn test_text_stays_in_cell() {
        let mut display = Ssd1306::new(MockBus::new(), SSD1306_ADDR);
        display.draw_char(60, 10, '3').unwrap();

        assert!(lit_pixels(&display) > 0);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if display.pixel(x, y) {
                    assert!((60..66).contains(&x), "x={} outside glyph cell", x);
                    assert!((10..20).contains(&y), "y={} outside glyph cell", y);
                }
            }
        }
    }

    #[test]
    fn test_clear() {
        let mut display = Ssd1306::new(MockBus::new(), SSD1306_ADDR);
        display.draw_text(8, 10, "Green LED: ON").unwrap();
        assert!(lit_pixels(&display) > 0);

        display.clear().unwrap();
        assert_eq!(lit_pixels(&display), 0);
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut display = Ssd1306::new(MockBus::new(), SSD1306_ADDR);
        assert_eq!(
            display.draw_text(128, 0, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            display.draw_rect(0, 64, 4, 4),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            display.draw_rect(0, 0, 0, 4),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_flush_sends_window_then_pages() {
        let mut display = Ssd1306::new(MockBus::new(), SSD1306_ADDR);
        display.draw_rect(0, 0, 1, 1).unwrap();
        display.flush().unwrap();

        let bus = display.release();
        assert_eq!(bus.writes.len(), 6 + PAGES);

        let commands: Vec<u8> = bus.writes[..6].iter().map(|(_, d)| d[1]).collect();
        assert_eq!(commands, [0x21, 0, 127, 0x22, 0, 7]);

        for (_, data) in &bus.writes[6..] {
            assert_eq!(data.len(), WIDTH + 1);
            assert_eq!(data[0], CONTROL_DATA);
        }
        // Pixel (0, 0) is bit 0 of the first byte of page 0
        assert_eq!(bus.writes[6].1[1], 0x01);
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let mut bus = MockBus::new();
        bus.fail = true;
        let mut display = Ssd1306::new(bus, SSD1306_ADDR);
        assert_eq!(display.flush(), Err(DisplayError::Communication));
        assert_eq!(display.init(), Err(DisplayError::Communication));
    }
}
