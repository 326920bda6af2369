use crate::geometry::QuadStream;
use crate::program::Program;

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    /// Issues one draw call for an axis-aligned quad.
    ///
    /// Corners in bottom-left, top-left, top-right, bottom-right order,
    /// split into two triangles for the core profile.
    pub fn draw_quad(&mut self, stream: &QuadStream, program: &Program, corners: [[f32; 2]; 4]) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }

        let [bl, tl, tr, br] = corners;

        #[rustfmt::skip]
        let vertices = [
            bl[0], bl[1], tl[0], tl[1], tr[0], tr[1],
            bl[0], bl[1], tr[0], tr[1], br[0], br[1],
        ];
        stream.upload(&vertices);

        unsafe {
            gl::BindVertexArray(stream.vao());
            gl::DrawArrays(gl::TRIANGLES, 0, QuadStream::VERTEX_COUNT as i32);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}
