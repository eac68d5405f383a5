//! Sprite-sheet animation
//!
//! An [`Animation`] maps accumulated simulation time to a cell of a sprite
//! sheet. The sheet is read as a wrapped 1-D strip: frames advance along a
//! row of `frame_width` cells and wrap to the next row when the row runs
//! out, so a cycle can span multiple rows. `row_start`/`column_start`
//! offset which sub-block of the sheet is used, which lets several
//! characters share one sheet.
//!
//! Time accumulation happens in [`advance`](Animation::advance) during the
//! update phase; [`draw`](Animation::draw) only reads state, so rendering
//! is a pure function of the current frame.

use macroquad::prelude::{draw_texture_ex, vec2, DrawTextureParams, Rect, WHITE};

use super::engine::Context;

/// Playback state for one animation cycle on a sprite sheet.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Asset key of the sprite sheet (shared, read-only texture).
    sheet: String,
    frame_width: f32,
    frame_height: f32,
    /// Seconds each frame stays on screen.
    frame_duration: f32,
    total_frames: usize,
    /// Accumulated playback time.
    elapsed: f32,
    looped: bool,
    /// Play the cycle back to front.
    reverse: bool,
    /// Row offset of this animation's sub-block in the sheet.
    row_start: usize,
    /// Column offset of this animation's sub-block in the sheet.
    column_start: usize,
    /// Frame-index offset into the cycle.
    center: usize,
}

impl Animation {
    pub fn new(
        sheet: impl Into<String>,
        frame_width: f32,
        frame_height: f32,
        frame_duration: f32,
        total_frames: usize,
        looped: bool,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            frame_width,
            frame_height,
            frame_duration,
            total_frames,
            elapsed: 0.0,
            looped,
            reverse: false,
            row_start: 0,
            column_start: 0,
            center: 0,
        }
    }

    /// Offset the animation's sub-block within the sheet.
    pub fn with_sheet_offset(mut self, row_start: usize, column_start: usize) -> Self {
        self.row_start = row_start;
        self.column_start = column_start;
        self
    }

    /// Play the cycle back to front.
    pub fn with_reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Start the cycle `center` frames in.
    pub fn with_center(mut self, center: usize) -> Self {
        self.center = center;
        self
    }

    /// Total cycle length in seconds.
    pub fn total_time(&self) -> f32 {
        self.frame_duration * self.total_frames as f32
    }

    /// A non-looping animation that has played its full cycle.
    pub fn is_done(&self) -> bool {
        !self.looped && self.elapsed >= self.total_time()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Accumulate playback time. A looping animation wraps back to 0 at the
    /// cycle boundary; a finished non-looping animation stays frozen.
    pub fn advance(&mut self, tick: f32) {
        if self.is_done() {
            return;
        }
        self.elapsed += tick;
        if self.looped && self.elapsed >= self.total_time() {
            self.elapsed = 0.0;
        }
    }

    /// Index of the frame to show, with the reverse mirror and `center`
    /// offset applied. Finished non-looping animations stay on the last
    /// frame.
    pub fn current_frame(&self) -> usize {
        let raw = (self.elapsed / self.frame_duration) as usize;
        let idx = raw.min(self.total_frames.saturating_sub(1));
        let idx = if self.reverse {
            self.total_frames - idx - 1
        } else {
            idx
        };
        idx + self.center
    }

    /// Source rectangle of the current frame within a sheet of the given
    /// pixel width. The frame index wraps to the next row whenever
    /// `(index + 1) * frame_width` would run past the sheet edge.
    pub fn source_rect(&self, sheet_width: f32) -> Rect {
        let columns = ((sheet_width / self.frame_width) as usize).max(1);
        let index = self.current_frame();
        let row = index / columns;
        let column = index % columns;
        Rect::new(
            (self.column_start + column) as f32 * self.frame_width,
            (self.row_start + row) as f32 * self.frame_height,
            self.frame_width,
            self.frame_height,
        )
    }

    /// Blit the current frame at `(x, y)` scaled by `scale`. A missing
    /// sheet texture or a finished non-looping animation draws nothing.
    pub fn draw(&self, ctx: &Context, x: f32, y: f32, scale: f32) {
        if self.is_done() {
            return;
        }
        let Some(texture) = ctx.assets.texture(&self.sheet) else {
            return;
        };
        let source = self.source_rect(texture.width());
        draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.frame_width * scale, self.frame_height * scale)),
                source: Some(source),
                ..Default::default()
            },
        );
    }
}
