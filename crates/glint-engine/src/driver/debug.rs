use glow::HasContext;

/// Drains the driver's pending error flags, logging each one.
///
/// Call after a group of GL calls with a short `context` naming them; every
/// pending flag is reported via `log::error!` with its symbolic name.
/// Returns the number of flags drained (0 means the queue was clean).
pub fn drain_errors(gl: &glow::Context, context: &str) -> usize {
    let mut drained = 0;
    loop {
        let code = unsafe { gl.get_error() };
        if code == glow::NO_ERROR {
            break;
        }
        log::error!("{} (0x{code:04x}) during {context}", error_name(code));
        drained += 1;
    }
    drained
}

fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "GL_UNKNOWN_ERROR",
    }
}
