use crate::device::Gl;

use super::Diagnostics;

/// Links `program`, records a warning if linking failed, and captures the
/// active uniforms.
///
/// A failed link is not an error here; the program is still handed back and
/// simply draws nothing.
pub(crate) fn link_and_inspect(
    gl: &dyn Gl,
    program: glow::Program,
    diagnostics: &mut Diagnostics,
) {
    gl.link_program(program);

    if !gl.program_link_status(program) {
        let log = gl.program_info_log(program);
        let log = log.trim_end();
        if log.is_empty() {
            diagnostics.warn(None, "program failed to link");
        } else {
            diagnostics.warn(None, format!("program failed to link: {log}"));
        }
        return;
    }

    diagnostics.set_uniforms(gl.active_uniforms(program));
}

/// Records that `compile(close = false)` found a live program and left it in place.
pub(crate) fn keep_live_program(diagnostics: &mut Diagnostics) {
    diagnostics.warn(None, "program is still live; compile without close keeps it");
}
