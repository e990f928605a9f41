//! The compiled-in build manifest.
//!
//! Everything Ardent installs, fetches and builds is listed here as
//! constant data. The orchestration code only walks these tables.

use std::collections::BTreeSet;

use crate::build::recipe::{
    ApplicationBuild, BuildRecipe, CompilerCheck, LibraryBuild, WafOptions,
};

/// Prefix shared by every MINGW64 package name.
pub const MINGW_PREFIX: &str = "mingw-w64-x86_64-";

/// MINGW64 packages, without [`MINGW_PREFIX`].
pub const MINGW_PACKAGES: &[&str] = &[
    "atk",
    "atkmm",
    "binutils",
    "boost",
    "c-ares",
    "ca-certificates",
    "cairo",
    "cairomm",
    "cmake",
    "cppunit",
    "crt-git",
    "curl",
    "dlfcn",
    "docbook-xsl",
    "fftw",
    "flac",
    "fontconfig",
    "freetype",
    "gcc",
    "gcc-libs",
    "gcc-objc",
    "gdb",
    "gdb-multiarch",
    "gdk-pixbuf2",
    "gettext",
    "glib2",
    "glibmm",
    "gnome-common",
    "gnutls",
    "gobject-introspection",
    "gtk-doc",
    "gtk2",
    "gtkmm",
    "harfbuzz",
    "headers-git",
    "icu",
    "jasper",
    "jbigkit",
    "ladspa-sdk",
    "libgccjit",
    "libidn",
    "libjpeg-turbo",
    "libmangle-git",
    "libogg",
    "libpng",
    "libsamplerate",
    "libsigc++",
    "libsndfile",
    "libssh2",
    "libtiff",
    "libusb",
    "libvorbis",
    "libxml2",
    "libwinpthread-git",
    "lld",
    "lua",
    "make",
    "meson",
    "nasm",
    "pango",
    "pangomm",
    "pcre",
    "perl",
    "pixman",
    "pkgconf",
    "portaudio",
    "python",
    "python-setuptools",
    "rtmpdump-git",
    "rubberband",
    "shared-mime-info",
    "soundtouch",
    "taglib",
    "tools-git",
    "vamp-plugin-sdk",
    "wget",
    "wineditline",
    "winpthreads-git",
    "winstorecompat-git",
];

/// MSYS packages, used verbatim.
pub const MSYS_PACKAGES: &[&str] = &[
    "autoconf",
    "autogen",
    "automake-wrapper",
    "bison",
    "dos2unix",
    "flex",
    "git",
    "gnome-doc-utils",
    "gtk-doc",
    "intltool",
    "libgnutls-devel",
    "libtool",
    "libutil-linux-devel",
    "msys2-runtime-devel",
    "patch",
    "pkgconf",
];

/// The full, deduplicated set of required system packages.
pub fn required_packages() -> BTreeSet<String> {
    MINGW_PACKAGES
        .iter()
        .map(|p| format!("{MINGW_PREFIX}{p}"))
        .chain(MSYS_PACKAGES.iter().map(|p| p.to_string()))
        .collect()
}

/// A source repository fetched into the deps directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    /// Clone URL. Its last path segment names the checkout directory.
    pub url: &'static str,
    /// Patch files applied, in order, right after a fresh clone.
    pub patches: &'static [&'static str],
}

impl Dependency {
    /// Checkout directory name (the last segment of the URL).
    pub fn dir_name(&self) -> &'static str {
        let trimmed = self.url.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

/// Repositories in fetch order.
pub const DEPENDENCIES: &[Dependency] = &[
    Dependency {
        url: "https://github.com/jackaudio/jack2",
        patches: &[],
    },
    Dependency {
        url: "https://github.com/aubio/aubio",
        patches: &["aubio_priv.h.patch"],
    },
    Dependency {
        url: "https://github.com/radarsat1/liblo",
        patches: &[],
    },
    Dependency {
        url: "https://github.com/x42/libltc",
        patches: &[],
    },
    Dependency {
        url: "https://github.com/swh/LRDF",
        patches: &["lrdf_types.h.patch"],
    },
    Dependency {
        url: "https://github.com/dajobe/raptor",
        patches: &["sort_r.h.patch"],
    },
    Dependency {
        url: "https://github.com/lv2/lv2kit",
        patches: &["win_in_gtk2.cpp.patch"],
    },
    Dependency {
        url: "git://git.ardour.org/ardour/ardour",
        patches: &["ardour-wscript.patch", "main.cc.patch", "pbd.cc.patch"],
    },
];

/// Libraries in build order.
///
/// aubio is built with Ardour's waf script, so the ardour checkout must
/// exist before this stage runs.
pub const LIBRARY_BUILDS: &[LibraryBuild] = &[
    LibraryBuild {
        dir: "jack2",
        recipe: BuildRecipe::Waf(WafOptions {
            script: "waf",
            compiler_checks: &[CompilerCheck::C, CompilerCheck::Cxx],
            extra: &[],
        }),
    },
    LibraryBuild {
        dir: "liblo",
        recipe: BuildRecipe::Autotools,
    },
    LibraryBuild {
        dir: "libltc",
        recipe: BuildRecipe::Autotools,
    },
    LibraryBuild {
        dir: "raptor",
        recipe: BuildRecipe::Autotools,
    },
    LibraryBuild {
        dir: "LRDF",
        recipe: BuildRecipe::Autotools,
    },
    LibraryBuild {
        dir: "lv2kit",
        recipe: BuildRecipe::Meson {
            options: &["-Dcxx=true"],
        },
    },
    LibraryBuild {
        dir: "aubio",
        recipe: BuildRecipe::Waf(WafOptions {
            script: "../ardour/waf",
            compiler_checks: &[CompilerCheck::C],
            extra: &["--disable-tests"],
        }),
    },
];

/// The application, built last.
pub const APPLICATION: ApplicationBuild = ApplicationBuild {
    name: "Ardour",
    dir: "ardour",
    compiler_checks: &[CompilerCheck::C, CompilerCheck::Cxx],
    config_dir: "/share",
    dist_target: "mingw",
    switches: &[
        "--no-dr-mingw",
        "--use-lld",
        "--optimize",
        "--exports-hidden",
        "--windows-vst",
    ],
    search_path_var: "PKG_CONFIG_PATH",
};

/// Look up a dependency by checkout directory name.
pub fn dependency(dir_name: &str) -> Option<&'static Dependency> {
    DEPENDENCIES.iter().find(|d| d.dir_name() == dir_name)
}
