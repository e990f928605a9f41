//! Declarative build descriptions.
//!
//! These types carry no behaviour of their own; the wrappers in
//! [`crate::build`] interpret them.

/// A compiler check waf should run during `configure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerCheck {
    /// Force the C compiler check to use `gcc`.
    C,
    /// Force the C++ compiler check to use `g++`.
    Cxx,
}

impl CompilerCheck {
    /// The waf command-line flag for this check.
    pub fn flag(self) -> &'static str {
        match self {
            Self::C => "--check-c-compiler=gcc",
            Self::Cxx => "--check-cxx-compiler=g++",
        }
    }
}

/// Options for one waf invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WafOptions {
    /// Path to the waf script, relative to the working directory.
    pub script: &'static str,
    /// Compiler checks, in the order their flags are emitted.
    pub compiler_checks: &'static [CompilerCheck],
    /// Extra options appended after the compiler checks.
    pub extra: &'static [&'static str],
}

/// Which build system a dependency uses, with its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildRecipe {
    /// `python3 waf configure build install`.
    Waf(WafOptions),
    /// `sh ./autogen.sh` followed by `make install`.
    Autotools,
    /// `meson setup`/`configure`/`compile`/`install`.
    Meson {
        /// Options passed to `meson configure`.
        options: &'static [&'static str],
    },
}

impl BuildRecipe {
    /// Short name of the build system.
    pub fn tool(&self) -> &'static str {
        match self {
            Self::Waf(_) => "waf",
            Self::Autotools => "autotools",
            Self::Meson { .. } => "meson",
        }
    }
}

/// A library in the fixed build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryBuild {
    /// Checkout directory name under the deps directory.
    pub dir: &'static str,
    /// How to build it.
    pub recipe: BuildRecipe,
}

/// The main application build.
///
/// The option list is spelled out field by field; [`Self::extra_args`]
/// renders it in the order waf expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationBuild {
    /// Display name.
    pub name: &'static str,
    /// Checkout directory name under the deps directory.
    pub dir: &'static str,
    /// Compiler checks for the wrapper and repeated in the extended options.
    pub compiler_checks: &'static [CompilerCheck],
    /// Value for `--configdir`.
    pub config_dir: &'static str,
    /// Value for `--dist-target`.
    pub dist_target: &'static str,
    /// Remaining feature switches (linker, optimisation, visibility, plugin format).
    pub switches: &'static [&'static str],
    /// Environment variable the pkg-config directory is appended to.
    pub search_path_var: &'static str,
}

impl ApplicationBuild {
    /// The extended option list appended to the waf wrapper's defaults.
    pub fn extra_args(&self, prefix: &str) -> Vec<String> {
        let mut args = vec![
            format!("--prefix={prefix}"),
            format!("--configdir={}", self.config_dir),
        ];
        args.extend(self.compiler_checks.iter().map(|c| c.flag().to_string()));
        args.push(format!("--dist-target={}", self.dist_target));
        args.extend(self.switches.iter().map(|s| s.to_string()));
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiler_check_flags() {
        assert_eq!(CompilerCheck::C.flag(), "--check-c-compiler=gcc");
        assert_eq!(CompilerCheck::Cxx.flag(), "--check-cxx-compiler=g++");
    }

    #[test]
    fn recipe_tool_names() {
        let waf = WafOptions {
            script: "waf",
            compiler_checks: &[],
            extra: &[],
        };
        assert_eq!(BuildRecipe::Waf(waf).tool(), "waf");
        assert_eq!(BuildRecipe::Autotools.tool(), "autotools");
        assert_eq!(BuildRecipe::Meson { options: &[] }.tool(), "meson");
    }

    #[test]
    fn application_extra_args_order() {
        let app = ApplicationBuild {
            name: "App",
            dir: "app",
            compiler_checks: &[CompilerCheck::C],
            config_dir: "/etc",
            dist_target: "auto",
            switches: &["--optimize"],
            search_path_var: "PKG_CONFIG_PATH",
        };
        assert_eq!(
            app.extra_args("/usr"),
            [
                "--prefix=/usr",
                "--configdir=/etc",
                "--check-c-compiler=gcc",
                "--dist-target=auto",
                "--optimize",
            ]
        );
    }
}
