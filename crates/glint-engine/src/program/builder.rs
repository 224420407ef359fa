use glint_shader::{ShaderSourcePair, ShaderStage};

use crate::driver::ShaderDriver;

use super::error::BuildError;

// ── Stage compilation ─────────────────────────────────────────────────────

/// Compiles one stage's source into a driver shader object.
///
/// On failure the info log is captured and the shader object is released
/// before returning, so the failure path allocates nothing.
pub fn compile_stage<D: ShaderDriver>(
    driver: &D,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, BuildError> {
    let shader = driver
        .create_shader(stage)
        .map_err(|reason| BuildError::CreateShader { stage, reason })?;

    driver.shader_source(shader, source);
    driver.compile_shader(shader);

    if !driver.compile_status(shader) {
        let log = driver.shader_log(shader);
        driver.delete_shader(shader);
        return Err(BuildError::Compile { stage, log });
    }

    Ok(shader)
}

// ── Program build ─────────────────────────────────────────────────────────

/// Compiles both stages and links them into a program.
///
/// Only successfully compiled stages are ever attached; a compile failure
/// aborts the build, releasing whatever was allocated so far, including the
/// program object itself. The caller owns the returned handle and releases
/// it through the driver at teardown.
pub fn build_program<D: ShaderDriver>(
    driver: &D,
    sources: &ShaderSourcePair,
) -> Result<D::Program, BuildError> {
    let program = driver.create_program().map_err(BuildError::CreateProgram)?;

    match link_stages(driver, program, sources) {
        Ok(()) => {
            log::debug!("shader program linked");
            Ok(program)
        }
        Err(err) => {
            driver.delete_program(program);
            Err(err)
        }
    }
}

fn link_stages<D: ShaderDriver>(
    driver: &D,
    program: D::Program,
    sources: &ShaderSourcePair,
) -> Result<(), BuildError> {
    let vertex = compile_stage(driver, ShaderStage::Vertex, &sources.vertex)?;
    let fragment = match compile_stage(driver, ShaderStage::Fragment, &sources.fragment) {
        Ok(shader) => shader,
        Err(err) => {
            driver.delete_shader(vertex);
            return Err(err);
        }
    };

    driver.attach_shader(program, vertex);
    driver.attach_shader(program, fragment);
    driver.link_program(program);
    driver.validate_program(program);

    let linked = driver.link_status(program);

    // The program keeps its own copy of the compiled stages after linking;
    // the standalone shader objects are unneeded whether the link succeeded
    // or not.
    driver.detach_shader(program, vertex);
    driver.detach_shader(program, fragment);
    driver.delete_shader(vertex);
    driver.delete_shader(fragment);

    if !linked {
        return Err(BuildError::Link {
            log: driver.program_log(program),
        });
    }

    Ok(())
}

#[cfg(test)]
mod build_tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct FakeShader(usize);
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct FakeProgram(usize);

    struct ShaderSlot {
        stage: ShaderStage,
        source: String,
        compiled: bool,
        deleted: bool,
        attached: bool,
    }

    struct ProgramSlot {
        attached: Vec<FakeShader>,
        linked: bool,
        deleted: bool,
    }

    /// In-memory driver recording object lifecycles. A source "compiles"
    /// unless it is empty or contains a `#error` directive; linking can be
    /// forced to fail via `fail_link`.
    #[derive(Default)]
    struct FakeDriver {
        shaders: RefCell<Vec<ShaderSlot>>,
        programs: RefCell<Vec<ProgramSlot>>,
        fail_link: Cell<bool>,
        fail_create_program: Cell<bool>,
    }

    impl ShaderDriver for FakeDriver {
        type Shader = FakeShader;
        type Program = FakeProgram;

        fn create_shader(&self, stage: ShaderStage) -> Result<FakeShader, String> {
            let mut shaders = self.shaders.borrow_mut();
            shaders.push(ShaderSlot {
                stage,
                source: String::new(),
                compiled: false,
                deleted: false,
                attached: false,
            });
            Ok(FakeShader(shaders.len() - 1))
        }

        fn shader_source(&self, shader: FakeShader, source: &str) {
            self.shaders.borrow_mut()[shader.0].source = source.to_string();
        }

        fn compile_shader(&self, shader: FakeShader) {
            let mut shaders = self.shaders.borrow_mut();
            let slot = &mut shaders[shader.0];
            slot.compiled = !slot.source.is_empty() && !slot.source.contains("#error");
        }

        fn compile_status(&self, shader: FakeShader) -> bool {
            self.shaders.borrow()[shader.0].compiled
        }

        fn shader_log(&self, shader: FakeShader) -> String {
            let stage = self.shaders.borrow()[shader.0].stage;
            format!("0:1: error in {stage} stage")
        }

        fn delete_shader(&self, shader: FakeShader) {
            self.shaders.borrow_mut()[shader.0].deleted = true;
        }

        fn create_program(&self) -> Result<FakeProgram, String> {
            if self.fail_create_program.get() {
                return Err("out of object names".to_string());
            }
            let mut programs = self.programs.borrow_mut();
            programs.push(ProgramSlot {
                attached: Vec::new(),
                linked: false,
                deleted: false,
            });
            Ok(FakeProgram(programs.len() - 1))
        }

        fn attach_shader(&self, program: FakeProgram, shader: FakeShader) {
            self.programs.borrow_mut()[program.0].attached.push(shader);
            self.shaders.borrow_mut()[shader.0].attached = true;
        }

        fn detach_shader(&self, program: FakeProgram, shader: FakeShader) {
            self.programs.borrow_mut()[program.0]
                .attached
                .retain(|s| *s != shader);
            self.shaders.borrow_mut()[shader.0].attached = false;
        }

        fn link_program(&self, program: FakeProgram) {
            let attached = self.programs.borrow()[program.0].attached.clone();
            let ok = !self.fail_link.get()
                && attached.len() == 2
                && attached.iter().all(|s| self.shaders.borrow()[s.0].compiled);
            self.programs.borrow_mut()[program.0].linked = ok;
        }

        fn validate_program(&self, _program: FakeProgram) {}

        fn link_status(&self, program: FakeProgram) -> bool {
            self.programs.borrow()[program.0].linked
        }

        fn program_log(&self, _program: FakeProgram) -> String {
            "error: no matching output for varying".to_string()
        }

        fn delete_program(&self, program: FakeProgram) {
            self.programs.borrow_mut()[program.0].deleted = true;
        }
    }

    const VS: &str = "void main() { gl_Position = vec4(0.0); }\n";
    const FS: &str = "void main() {}\n";

    fn pair(vs: &str, fs: &str) -> ShaderSourcePair {
        ShaderSourcePair::new(vs, fs)
    }

    #[test]
    fn valid_pair_links() {
        let driver = FakeDriver::default();
        let program = build_program(&driver, &pair(VS, FS)).unwrap();
        assert!(!driver.programs.borrow()[program.0].deleted);
        // Stage objects are detached and released after a successful link.
        for slot in driver.shaders.borrow().iter() {
            assert!(slot.deleted);
            assert!(!slot.attached);
        }
    }

    #[test]
    fn vertex_compile_error_names_stage() {
        let driver = FakeDriver::default();
        let err = build_program(&driver, &pair("#error bad\n", FS)).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Compile { stage: ShaderStage::Vertex, .. }
        ));
        assert!(err.to_string().contains("vertex"));
        // Failed stage released, program released, fragment never created.
        let shaders = driver.shaders.borrow();
        assert_eq!(shaders.len(), 1);
        assert!(shaders[0].deleted);
        assert!(driver.programs.borrow()[0].deleted);
    }

    #[test]
    fn fragment_failure_releases_compiled_vertex() {
        let driver = FakeDriver::default();
        let err = build_program(&driver, &pair(VS, "#error bad\n")).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Compile { stage: ShaderStage::Fragment, .. }
        ));
        let shaders = driver.shaders.borrow();
        assert!(shaders.iter().all(|s| s.deleted));
        assert!(shaders.iter().all(|s| !s.attached));
        assert!(driver.programs.borrow()[0].deleted);
    }

    #[test]
    fn empty_section_fails_at_compile() {
        // A missing `#shader fragment` section is not a split error; it
        // surfaces here as an empty-source compile failure for that stage.
        let driver = FakeDriver::default();
        let err = build_program(&driver, &pair(VS, "")).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Compile { stage: ShaderStage::Fragment, .. }
        ));
    }

    #[test]
    fn link_failure_releases_everything() {
        let driver = FakeDriver::default();
        driver.fail_link.set(true);
        let err = build_program(&driver, &pair(VS, FS)).unwrap_err();
        let BuildError::Link { log } = &err else {
            panic!("expected link error, got {err}");
        };
        assert!(log.contains("varying"));
        assert!(driver.programs.borrow()[0].deleted);
        assert!(driver.shaders.borrow().iter().all(|s| s.deleted));
    }

    #[test]
    fn program_creation_failure_does_no_further_work() {
        let driver = FakeDriver::default();
        driver.fail_create_program.set(true);
        let err = build_program(&driver, &pair(VS, FS)).unwrap_err();
        assert!(matches!(err, BuildError::CreateProgram(_)));
        assert!(driver.shaders.borrow().is_empty());
    }

    #[test]
    fn repeated_builds_are_independent() {
        let driver = FakeDriver::default();
        let first = build_program(&driver, &pair(VS, FS)).unwrap();
        let second = build_program(&driver, &pair(VS, FS)).unwrap();
        assert_ne!(first, second);
        driver.delete_program(first);
        assert!(driver.programs.borrow()[first.0].deleted);
        assert!(!driver.programs.borrow()[second.0].deleted);
    }

    #[test]
    fn compile_stage_reports_driver_log() {
        let driver = FakeDriver::default();
        let err = compile_stage(&driver, ShaderStage::Fragment, "#error x").unwrap_err();
        assert!(err.to_string().contains("error in fragment stage"));
    }
}
