use std::ffi::c_void;

/// Vertex buffer for one quad at a time, re-uploaded before every draw.
///
/// Holds six vec2 vertices, the quad split into two triangles.
pub struct QuadStream {
    vao: u32,
    vbo: u32,
}

impl QuadStream {
    pub const VERTEX_COUNT: usize = 6;
    const FLOAT_COUNT: usize = Self::VERTEX_COUNT * 2;

    pub fn new() -> Self {
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                (Self::FLOAT_COUNT * std::mem::size_of::<f32>()) as isize,
                std::ptr::null(),
                gl::DYNAMIC_DRAW,
            );

            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                (2 * std::mem::size_of::<f32>()) as i32,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        Self { vao, vbo }
    }

    pub fn upload(&self, vertices: &[f32; Self::FLOAT_COUNT]) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);

            gl::BufferSubData(
                gl::ARRAY_BUFFER,
                0,
                (vertices.len() * std::mem::size_of::<f32>()) as isize,
                vertices.as_ptr() as *const c_void,
            );

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
    }

    pub fn vao(&self) -> u32 {
        self.vao
    }
}

impl Drop for QuadStream {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}
