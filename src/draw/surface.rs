//! Render surface abstraction.

use super::color::Color;
use super::command::DrawCommand;
use crate::util::Point;
use thiserror::Error;

/// Errors raised while presenting a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to write frame image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(String),
}

/// Drawing target for one frame at a time.
///
/// Draw calls return nothing; only starting and presenting a frame can fail.
pub trait RenderSurface {
    /// Prepares a blank frame of the given size.
    fn begin_frame(&mut self, index: u64, width: u32, height: u32) -> Result<(), RenderError>;

    fn draw_rect(&mut self, top_left: Point, bottom_right: Point, color: Color, filled: bool);

    fn draw_text(&mut self, position: Point, text: &str, font_size: f64, color: Color);

    fn draw_line(&mut self, start: Point, end: Point, color: Color, thickness: f64);

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, filled: bool);

    /// Shows the finished frame.
    fn present(&mut self) -> Result<(), RenderError>;

    /// Replays a recorded command.
    fn execute(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        match command {
            DrawCommand::Rect {
                top_left,
                bottom_right,
                color,
                filled,
            } => self.draw_rect(*top_left, *bottom_right, *color, *filled),
            DrawCommand::Text {
                position,
                text,
                font_size,
                color,
            } => self.draw_text(*position, text, *font_size, *color),
            DrawCommand::Line {
                start,
                end,
                color,
                thickness,
            } => self.draw_line(*start, *end, *color, *thickness),
            DrawCommand::Circle {
                center,
                radius,
                color,
                filled,
            } => self.draw_circle(*center, *radius, *color, *filled),
            DrawCommand::Present => return self.present(),
        }
        Ok(())
    }
}

/// Surface that records commands instead of drawing them.
///
/// Used for headless runs and to assert on the exact instruction sequence.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    /// Commands of the frame in progress
    current: Vec<DrawCommand>,
    /// Commands of the most recently presented frame, ending in `Present`
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the frame in progress.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.current
    }

    /// Commands of the last presented frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSurface for CommandRecorder {
    fn begin_frame(&mut self, _index: u64, _width: u32, _height: u32) -> Result<(), RenderError> {
        self.current.clear();
        Ok(())
    }

    fn draw_rect(&mut self, top_left: Point, bottom_right: Point, color: Color, filled: bool) {
        self.current.push(DrawCommand::Rect {
            top_left,
            bottom_right,
            color,
            filled,
        });
    }

    fn draw_text(&mut self, position: Point, text: &str, font_size: f64, color: Color) {
        self.current.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            font_size,
            color,
        });
    }

    fn draw_line(&mut self, start: Point, end: Point, color: Color, thickness: f64) {
        self.current.push(DrawCommand::Line {
            start,
            end,
            color,
            thickness,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, filled: bool) {
        self.current.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled,
        });
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.current.push(DrawCommand::Present);
        self.last_frame = std::mem::take(&mut self.current);
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{GREEN, WHITE};

    #[test]
    fn recorder_keeps_last_presented_frame() {
        let mut recorder = CommandRecorder::new();
        recorder.begin_frame(0, 100, 100).unwrap();
        recorder.draw_rect(Point::new(0, 0), Point::new(10, 10), WHITE, true);
        recorder.present().unwrap();

        recorder.begin_frame(1, 100, 100).unwrap();
        recorder.draw_circle(Point::new(5, 5), 2, GREEN, true);
        assert_eq!(recorder.pending().len(), 1);

        assert_eq!(recorder.frames_presented(), 1);
        assert_eq!(recorder.last_frame().len(), 2);
        assert_eq!(recorder.last_frame()[1], DrawCommand::Present);
    }

    #[test]
    fn execute_replays_commands() {
        let mut source = CommandRecorder::new();
        source.begin_frame(0, 10, 10).unwrap();
        source.draw_text(Point::new(1, 9), "A", 12.0, WHITE);
        source.present().unwrap();

        let mut copy = CommandRecorder::new();
        copy.begin_frame(0, 10, 10).unwrap();
        for command in source.last_frame() {
            copy.execute(command).unwrap();
        }
        assert_eq!(copy.last_frame(), source.last_frame());
    }
}
