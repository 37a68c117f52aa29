//! Canvas 2D draw target

use game_core::{Color, DrawTarget};
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawTarget for CanvasTarget {
    type Error = JsValue;

    fn clear(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }

    fn dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        color: Color,
    ) -> Result<(), JsValue> {
        let pattern = js_sys::Array::of2(&dash[0].into(), &dash[1].into());

        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_dash(&pattern)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        // Reset so later strokes are solid
        self.ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &str,
        color: Color,
    ) -> Result<(), JsValue> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_text(text, x as f64, y as f64)
    }
}
