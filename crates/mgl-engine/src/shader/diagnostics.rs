use std::fmt;

use log::Level;

use crate::device::ActiveUniform;

/// One message produced while building a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    /// File name or stage tag the message refers to; `None` for program-wide messages.
    pub stage: Option<String>,
    pub message: String,
}

/// Everything a compile/load pass has to say.
///
/// Returned to the caller instead of being printed, so it can be asserted on
/// in tests or forwarded to the logger with [`Diagnostics::emit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    uniforms: Vec<ActiveUniform>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, stage: Option<&str>, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            level,
            stage: stage.map(str::to_string),
            message: message.into(),
        });
    }

    pub fn error(&mut self, stage: Option<&str>, message: impl Into<String>) {
        self.push(Level::Error, stage, message);
    }

    pub fn warn(&mut self, stage: Option<&str>, message: impl Into<String>) {
        self.push(Level::Warn, stage, message);
    }

    pub fn set_uniforms(&mut self, uniforms: Vec<ActiveUniform>) {
        self.uniforms = uniforms;
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.level == Level::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn uniforms(&self) -> &[ActiveUniform] {
        &self.uniforms
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.uniforms.is_empty()
    }

    /// Forwards everything to the `log` facade.
    ///
    /// Errors are grouped into a single block; the uniform table goes out at
    /// debug level.
    pub fn emit(&self) {
        for (level, text) in self.records() {
            log::log!(level, "{text}");
        }
    }

    /// The log records [`Diagnostics::emit`] sends, in order.
    fn records(&self) -> Vec<(Level, String)> {
        let mut out = Vec::new();

        let errors: Vec<String> = self.errors().map(format_entry).collect();
        if !errors.is_empty() {
            out.push((Level::Error, format!("shader errors\n{{\n{}}}", errors.concat())));
        }

        for d in self.entries.iter().filter(|d| d.level != Level::Error) {
            out.push((d.level, format_entry(d).trim_end().to_string()));
        }

        if !self.uniforms.is_empty() {
            out.push((Level::Debug, format!("active uniforms\n{}", UniformTable(&self.uniforms))));
        }
        out
    }
}

fn format_entry(d: &Diagnostic) -> String {
    let tag = d.stage.as_deref().unwrap_or("program");
    let mut out = String::new();
    for (i, line) in d.message.trim_end().lines().enumerate() {
        if i == 0 {
            out.push_str(&format!("\t({tag})  {line}\n"));
        } else {
            out.push_str(&format!("\t        {line}\n"));
        }
    }
    if out.is_empty() {
        out = format!("\t({tag})\n");
    }
    out
}

/// Fixed-width rendering of active uniforms: index, location, name, type, size.
pub struct UniformTable<'a>(pub &'a [ActiveUniform]);

impl fmt::Display for UniformTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for u in self.0 {
            let location = u
                .location
                .map_or_else(|| "-".to_string(), |l| l.to_string());
            writeln!(
                f,
                "\t{:<20}{:<20}{:<20}{:<20}{:<10}",
                u.index,
                location,
                u.name,
                uniform_type_name(u.utype),
                u.size,
            )?;
        }
        write!(f, "}}")
    }
}

/// GLSL spelling of a uniform type enum.
pub fn uniform_type_name(utype: u32) -> String {
    let name = match utype {
        glow::FLOAT => "float",
        glow::FLOAT_VEC2 => "vec2",
        glow::FLOAT_VEC3 => "vec3",
        glow::FLOAT_VEC4 => "vec4",
        glow::INT => "int",
        glow::INT_VEC2 => "ivec2",
        glow::INT_VEC3 => "ivec3",
        glow::INT_VEC4 => "ivec4",
        glow::UNSIGNED_INT => "uint",
        glow::BOOL => "bool",
        glow::FLOAT_MAT2 => "mat2",
        glow::FLOAT_MAT3 => "mat3",
        glow::FLOAT_MAT4 => "mat4",
        glow::SAMPLER_2D => "sampler2D",
        glow::SAMPLER_3D => "sampler3D",
        glow::SAMPLER_CUBE => "samplerCube",
        other => return format!("0x{other:04X}"),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(index: u32, name: &str, utype: u32) -> ActiveUniform {
        ActiveUniform {
            index,
            location: Some(index * 2),
            name: name.to_string(),
            utype,
            size: 1,
        }
    }

    #[test]
    fn errors_filters_by_level() {
        let mut d = Diagnostics::new();
        d.warn(None, "link log");
        d.error(Some("default.frag"), "syntax error");
        assert!(d.has_errors());
        let errors: Vec<_> = d.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].stage.as_deref(), Some("default.frag"));
    }

    #[test]
    fn errors_are_grouped_into_one_record() {
        let mut d = Diagnostics::new();
        d.error(Some("default.vert"), "bad token");
        d.warn(None, "program failed to link");
        d.error(Some("default.frag"), "missing main");
        d.set_uniforms(vec![uniform(0, "uColor", glow::FLOAT_VEC4)]);

        let records = d.records();
        assert_eq!(records.len(), 3);

        let (level, text) = &records[0];
        assert_eq!(*level, Level::Error);
        assert_eq!(
            text,
            "shader errors\n{\n\t(default.vert)  bad token\n\t(default.frag)  missing main\n}"
        );

        assert_eq!(records[1], (Level::Warn, "\t(program)  program failed to link".to_string()));
        assert_eq!(records[2].0, Level::Debug);
        assert!(records[2].1.contains("uColor"));
    }

    #[test]
    fn nothing_to_emit_for_empty_diagnostics() {
        assert!(Diagnostics::new().records().is_empty());
    }

    #[test]
    fn format_entry_indents_continuation_lines() {
        let d = Diagnostic {
            level: Level::Error,
            stage: Some("VERT".to_string()),
            message: "line one\nline two\n".to_string(),
        };
        assert_eq!(format_entry(&d), "\t(VERT)  line one\n\t        line two\n");
    }

    #[test]
    fn uniform_table_columns() {
        let rows = [uniform(0, "uColor", glow::FLOAT_VEC4), uniform(1, "uMvp", glow::FLOAT_MAT4)];
        let text = UniformTable(&rows).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"{"));
        assert_eq!(lines.last(), Some(&"}"));
        assert!(lines[1].starts_with("\t0"));
        assert_eq!(&lines[1][41..47], "uColor");
        assert!(lines[2].contains("mat4"));
    }

    #[test]
    fn unknown_uniform_type_is_hex() {
        assert_eq!(uniform_type_name(0x1234), "0x1234");
    }
}
