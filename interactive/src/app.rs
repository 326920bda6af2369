use std::ffi::{CStr, CString};
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use cgmath::Vector2;

use carpet::square::Square;
use carpet::QuadSink;

use gl_wrapper::geometry::QuadStream;
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl App {
    pub fn new(size: PhysicalSize<u32>) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(size))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title("Carpet");
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| configs.next().unwrap())
            .unwrap();

        let window = window.ok_or(AppError::WindowCreation)?;
        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 0))))
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config);

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attr)
                .unwrap()
        }
        .make_current(&gl_window.surface)
        .unwrap();

        gl::load_with(|s| {
            gl_display
                .get_proc_address(CString::new(s).unwrap().as_c_str())
                .cast()
        });

        unsafe {
            let renderer = CStr::from_ptr(gl::GetString(gl::RENDERER).cast());
            let version = CStr::from_ptr(gl::GetString(gl::VERSION).cast());

            println!("Renderer: {}", renderer.to_string_lossy());
            println!("OpenGL version supported: {}", version.to_string_lossy());
        }

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
        })
    }

    pub fn run(self) -> ! {
        let stream = QuadStream::new();
        let program = ProgramBuilder::new(
            include_str!("gl_shaders/quad.glsl"),
            include_str!("gl_shaders/solid.glsl"),
        )
        .build()
        .unwrap();

        let mut gl_renderer = GlRenderer::new();

        self.event_loop
            .run(move |event, _window_target, control_flow| {
                *control_flow = ControlFlow::Poll;
                match event {
                    Event::RedrawEventsCleared => {
                        self.gl_window.window.request_redraw();
                        self.gl_window
                            .surface
                            .swap_buffers(&self.gl_context)
                            .unwrap();
                    }
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::Resized(size) => {
                            if size.width != 0 && size.height != 0 {
                                self.gl_window.surface.resize(
                                    &self.gl_context,
                                    NonZeroU32::new(size.width).unwrap(),
                                    NonZeroU32::new(size.height).unwrap(),
                                );
                                gl_renderer.resize(size.width, size.height);
                            }
                        }
                        WindowEvent::CloseRequested => control_flow.set_exit(),
                        _ => (),
                    },
                    Event::RedrawRequested(_) => {
                        gl_renderer.clear_color(0.0, 0.0, 0.0);

                        let mut sink = GlQuadSink {
                            renderer: &mut gl_renderer,
                            stream: &stream,
                            program: &program,
                        };

                        carpet::subdivide(&mut sink, Square::unit(), 0);
                    }
                    _ => (),
                }
            })
    }
}

/// Feeds subdivision output to the GL renderer, one draw call per quad.
struct GlQuadSink<'a> {
    renderer: &'a mut GlRenderer,
    stream: &'a QuadStream,
    program: &'a Program,
}

impl QuadSink for GlQuadSink<'_> {
    fn draw_quad(&mut self, corners: [Vector2<f32>; 4]) {
        self.renderer
            .draw_quad(self.stream, self.program, corners.map(|c| [c.x, c.y]));
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Self {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).unwrap(),
            NonZeroU32::new(height).unwrap(),
        );

        let surface = unsafe {
            config
                .display()
                .create_window_surface(config, &attrs)
                .unwrap()
        };

        Self { window, surface }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not open a window")]
    WindowCreation,
}
