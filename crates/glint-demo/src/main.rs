//! Tutorial viewer: an indexed quad with an animated uniform color.
//!
//! Pass a path to a tagged `.shader` asset as the first argument to use it
//! instead of the built-in one.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context as _, Result};
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use glint_engine::asset;
use glint_engine::driver::{drain_errors, GlowDriver};
use glint_engine::logging;
use glint_engine::program::build_program;
use glint_shader::{split_source, ShaderSourcePair};

const BUILTIN_ASSET: &str = include_str!("../assets/basic.shader");

/// One vertex per quad corner; positions are already in clip space.
#[rustfmt::skip]
const QUAD_VERTICES: [f32; 8] = [
    -0.5, -0.5,
     0.5, -0.5,
     0.5,  0.5,
    -0.5,  0.5,
];

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

fn main() -> Result<()> {
    logging::init_logging("glint_demo=debug,glint_engine=debug");

    let sources = match std::env::args().nth(1) {
        Some(path) => asset::load_source_pair(&path)?,
        None => split_source(BUILTIN_ASSET),
    };

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(sources);
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    Ok(())
}

// ── App state ─────────────────────────────────────────────────────────────

/// Everything owned once the window and GL context exist.
///
/// Field order matters for drop: the surface and context go before the
/// window they were created against.
struct GlState {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
    gl: glow::Context,
    program: glow::NativeProgram,
    vao: glow::NativeVertexArray,
    color_location: Option<glow::NativeUniformLocation>,

    // Animated red channel; bounces between 0 and 1 as in the classic
    // tutorial loop.
    red: f32,
    step: f32,
}

struct DemoApp {
    sources: ShaderSourcePair,
    state: Option<GlState>,
}

impl DemoApp {
    fn new(sources: ShaderSourcePair) -> Self {
        Self { sources, state: None }
    }

    fn render(&mut self) {
        let Some(state) = self.state.as_mut() else { return };

        unsafe {
            state.gl.clear(glow::COLOR_BUFFER_BIT);
            state
                .gl
                .uniform_4_f32(state.color_location.as_ref(), state.red, 0.3, 0.8, 1.0);
            state
                .gl
                .draw_elements(glow::TRIANGLES, QUAD_INDICES.len() as i32, glow::UNSIGNED_INT, 0);
        }
        drain_errors(&state.gl, "quad draw");

        if state.red > 1.0 {
            state.step = -0.05;
        } else if state.red < 0.0 {
            state.step = 0.05;
        }
        state.red += state.step;

        if let Err(e) = state.surface.swap_buffers(&state.context) {
            log::warn!("swap_buffers failed: {e}");
        }
        state.window.request_redraw();
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(state) = self.state.as_ref() else { return };
        let (Some(w), Some(h)) = (
            NonZeroU32::new(new_size.width),
            NonZeroU32::new(new_size.height),
        ) else {
            return;
        };

        state.surface.resize(&state.context, w, h);
        unsafe {
            state
                .gl
                .viewport(0, 0, new_size.width as i32, new_size.height as i32);
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match init_gl(event_loop, &self.sources) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("failed to initialize GL: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::RedrawRequested => self.render(),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Release the GPU objects we created; the context itself dies with
        // the process.
        if let Some(state) = self.state.take() {
            unsafe {
                state.gl.delete_vertex_array(state.vao);
                state.gl.delete_program(state.program);
            }
        }
    }
}

// ── GL bring-up ───────────────────────────────────────────────────────────

fn init_gl(event_loop: &ActiveEventLoop, sources: &ShaderSourcePair) -> Result<GlState> {
    let attrs = Window::default_attributes()
        .with_title("glint demo")
        .with_inner_size(LogicalSize::new(640.0, 480.0));

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(attrs))
        .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
        .map_err(|e| anyhow!("failed to create GL display: {e}"))?;
    let window = window.ok_or_else(|| anyhow!("display builder returned no window"))?;

    let raw_window_handle = window
        .window_handle()
        .context("failed to get window handle")?
        .as_raw();

    let gl_display = gl_config.display();

    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .build(Some(raw_window_handle));
    let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
        .context("failed to create GL context")?;

    let surface_attributes = window
        .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
        .context("failed to build surface attributes")?;
    let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
        .context("failed to create window surface")?;

    let context = not_current
        .make_current(&surface)
        .context("failed to make GL context current")?;

    if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        log::warn!("vsync unavailable: {e}");
    }

    let gl =
        unsafe { glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s)) };

    log::info!("GL version: {}", unsafe {
        gl.get_parameter_string(glow::VERSION)
    });

    let driver = GlowDriver::new(&gl);
    let program = build_program(&driver, sources).context("shader program build failed")?;

    let vao = upload_quad(&gl)?;

    unsafe { gl.use_program(Some(program)) };
    let color_location = unsafe { gl.get_uniform_location(program, "u_color") };
    if color_location.is_none() {
        log::warn!("shader has no u_color uniform; color animation disabled");
    }

    drain_errors(&gl, "GL bring-up");

    Ok(GlState {
        surface,
        context,
        window,
        gl,
        program,
        vao,
        color_location,
        red: 0.0,
        step: 0.05,
    })
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // Prefer the config with the most samples, as in the upstream glutin
    // examples.
    configs
        .reduce(|best, c| if c.num_samples() > best.num_samples() { c } else { best })
        .expect("no GL configs returned by the display")
}

/// Uploads the quad geometry once: a bound VAO holding one vertex buffer
/// (vec2 position at location 0) and one index buffer.
fn upload_quad(gl: &glow::Context) -> Result<glow::NativeVertexArray> {
    unsafe {
        let vao = gl
            .create_vertex_array()
            .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl
            .create_buffer()
            .map_err(|e| anyhow!("failed to create vertex buffer: {e}"))?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_VERTICES),
            glow::STATIC_DRAW,
        );
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, 2 * 4, 0);

        let ibo = gl
            .create_buffer()
            .map_err(|e| anyhow!("failed to create index buffer: {e}"))?;
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_INDICES),
            glow::STATIC_DRAW,
        );

        Ok(vao)
    }
}
