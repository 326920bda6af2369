use std::ffi::{c_char, CString};

use gl::types::{GLenum, GLuint};
use thiserror::Error;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: CString::new(vert_src).unwrap(),
            frag: CString::new(frag_src).unwrap(),
        }
    }

    pub fn build(self) -> Result<Program, ProgramError> {
        unsafe {
            let vert = compile_shader(gl::VERTEX_SHADER, &self.vert)?;
            let frag = compile_shader(gl::FRAGMENT_SHADER, &self.frag)?;

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; 1024];
                gl::GetProgramInfoLog(
                    program,
                    buf.len() as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );

                return Err(ProgramError::Linking(read_info_log(&buf)));
            }

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id: program })
        }
    }
}

unsafe fn compile_shader(kind: GLenum, src: &CString) -> Result<GLuint, ProgramError> {
    let shader = gl::CreateShader(kind);

    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );
    gl::CompileShader(shader);

    let mut success = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
    if success != 1 {
        let mut buf = [0_u8; 1024];
        gl::GetShaderInfoLog(
            shader,
            buf.len() as i32,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );

        return Err(ProgramError::Compilation(read_info_log(&buf)));
    }

    Ok(shader)
}

fn read_info_log(buf: &[u8]) -> String {
    let log = buf.split(|b| *b == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(log).to_string()
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
