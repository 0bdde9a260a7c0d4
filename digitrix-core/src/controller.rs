//! Event controller
//!
//! Owns every piece of mutable application state: button toggles, debounce
//! gates, indicator outputs, the LED matrix and the display. Button edges and
//! serial bytes are handled one at a time in arrival order, so only one
//! repaint is ever in progress and the last handled event owns the screen.

use digitrix_display::{DisplayBackend, DisplayError};
use digitrix_hal::UartRx;
use heapless::String;

use crate::config::{BoardConfig, MAX_LABEL_LEN, MAX_NAME_LEN};
use crate::input::{ButtonId, ButtonMachine, InputEvent, BUTTON_COUNT};
use crate::matrix::{Color, Digit, MatrixRenderer};
use crate::screen;
use crate::traits::{IndicatorOutput, PixelSink};

/// Errors surfaced to the firmware
///
/// There is no recovery path; the caller logs and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// Repainting the display failed
    Display(DisplayError),
    /// Reading the serial source failed
    Serial,
}

impl From<DisplayError> for ControlError {
    fn from(e: DisplayError) -> Self {
        ControlError::Display(e)
    }
}

/// Result of a button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge fell inside the debounce window and was dropped
    Suppressed,
    /// Button state flipped
    Toggled { id: ButtonId, on: bool },
}

/// Result of a serial poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialOutcome {
    /// Nothing was waiting
    Idle,
    /// Byte shown on the display, matrix untouched
    Shown(u8),
    /// Digit shown on the display and drawn on the matrix
    ShownDigit(Digit),
}

/// Result of [`Controller::handle_event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handled {
    Edge(EdgeOutcome),
    Serial(SerialOutcome),
}

/// Single owner of the board's outputs
pub struct Controller<D, S, O> {
    display: D,
    matrix: MatrixRenderer<S>,
    indicators: [O; BUTTON_COUNT],
    buttons: ButtonMachine,
    names: [String<MAX_NAME_LEN>; BUTTON_COUNT],
    label: String<MAX_LABEL_LEN>,
    color: Color,
}

impl<D, S, O> Controller<D, S, O>
where
    D: DisplayBackend,
    S: PixelSink,
    O: IndicatorOutput,
{
    /// Create a controller; `indicators` is indexed by [`ButtonId::index`]
    pub fn new(config: &BoardConfig, display: D, sink: S, indicators: [O; BUTTON_COUNT]) -> Self {
        Self {
            display,
            matrix: MatrixRenderer::new(sink),
            indicators,
            buttons: ButtonMachine::new(config.debounce.window_us, config.debounce.scope),
            names: [
                config.button(ButtonId::A).name.clone(),
                config.button(ButtonId::B).name.clone(),
            ],
            label: config.display.label.clone(),
            color: config.matrix.color,
        }
    }

    /// Put every output into its idle state
    ///
    /// Indicators off, matrix dark, display blank.
    pub fn start(&mut self) -> Result<(), ControlError> {
        for indicator in self.indicators.iter_mut() {
            indicator.set_on(false);
        }
        self.matrix.blank();
        screen::paint_blank(&mut self.display)?;
        Ok(())
    }

    /// Handle a falling edge on a button line
    ///
    /// On acceptance the indicator follows the new state even if the
    /// following repaint fails.
    pub fn on_button_edge(
        &mut self,
        id: ButtonId,
        timestamp_us: u64,
    ) -> Result<EdgeOutcome, ControlError> {
        let Some(on) = self.buttons.on_edge(id, timestamp_us) else {
            return Ok(EdgeOutcome::Suppressed);
        };

        self.indicators[id.index()].set_on(on);
        screen::paint_button_status(&mut self.display, &self.names[id.index()], on)?;

        Ok(EdgeOutcome::Toggled { id, on })
    }

    /// Handle one received byte
    ///
    /// Every byte is shown on the display. ASCII digits are also drawn on the
    /// matrix; anything else leaves the matrix as it was.
    pub fn on_char(&mut self, byte: u8) -> Result<SerialOutcome, ControlError> {
        let painted = screen::paint_received_char(&mut self.display, char::from(byte), &self.label);

        let outcome = match Digit::from_ascii(byte) {
            Some(digit) => {
                self.matrix.render_digit(digit, self.color);
                SerialOutcome::ShownDigit(digit)
            }
            None => SerialOutcome::Shown(byte),
        };

        painted?;
        Ok(outcome)
    }

    /// Take at most one byte from `rx` without blocking
    pub fn poll_serial<R: UartRx>(&mut self, rx: &mut R) -> Result<SerialOutcome, ControlError> {
        match rx.try_read_byte() {
            Ok(Some(byte)) => self.on_char(byte),
            Ok(None) => Ok(SerialOutcome::Idle),
            Err(_) => Err(ControlError::Serial),
        }
    }

    /// Dispatch a queued event
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Handled, ControlError> {
        match event {
            InputEvent::ButtonEdge { id, timestamp_us } => {
                self.on_button_edge(id, timestamp_us).map(Handled::Edge)
            }
            InputEvent::Char(byte) => self.on_char(byte).map(Handled::Serial),
        }
    }

    /// Current toggle state of a button
    pub fn button_state(&self, id: ButtonId) -> bool {
        self.buttons.state(id)
    }

    /// Indicator driven by a button
    pub fn indicator(&self, id: ButtonId) -> &O {
        &self.indicators[id.index()]
    }

    /// LED matrix renderer
    pub fn matrix(&self) -> &MatrixRenderer<S> {
        &self.matrix
    }

    /// Display backend
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Digit color
    pub fn color(&self) -> Color {
        self.color
    }
}
