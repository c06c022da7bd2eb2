//! Named style prototypes, grouped by UI region.
//!
//! A [`Scheme`] holds every prototype the resolver composes from. The
//! category set is closed: each prototype is a plain struct field, so a
//! reference to a nonexistent category cannot be written at all. The
//! built-in [`Scheme::default`] reproduces the stock appearance; hosts
//! may tweak fields directly or deserialize a scheme from config, where
//! any omitted group or field falls back to the default.
//!
//! Prototypes are data, not behavior. They are read-only during
//! resolution, and the process-wide [`default_scheme`] is constructed
//! once and shared freely across threads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::{BaseColor, ColorValue};
use crate::style::StyleStack;

fn base(c: BaseColor) -> StyleStack {
    StyleStack::new().fg(ColorValue::Base(c))
}

/// Prototypes for file and content kinds shown in the browser pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKindStyles {
    pub directory: StyleStack,
    pub link: StyleStack,
    pub link_bad: StyleStack,
    pub socket: StyleStack,
    pub fifo: StyleStack,
    pub device: StyleStack,
    /// Base for plain files; the kinds below compose onto it.
    pub file: StyleStack,
    pub executable: StyleStack,
    pub container: StyleStack,
    pub document: StyleStack,
    pub video: StyleStack,
    pub audio: StyleStack,
    pub image: StyleStack,
    pub media: StyleStack,
}

impl Default for FileKindStyles {
    fn default() -> Self {
        use BaseColor::*;
        Self {
            directory: base(Blue).bright(true).bold(true),
            link: base(Cyan).bright(true).bold(true),
            link_bad: base(Red).bright(true).bold(true),
            socket: base(Magenta).bright(true).bold(true),
            fifo: base(Magenta).bright(true).bold(true),
            device: base(Magenta).bright(true).bold(true),
            file: StyleStack::new(),
            executable: base(Green).bright(true).bold(true),
            container: base(Red),
            document: StyleStack::new(),
            video: base(Magenta),
            audio: base(Cyan),
            image: base(Yellow),
            media: base(Magenta),
        }
    }
}

/// Overlay prototypes for the browser pane (selection, marking, errors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserStyles {
    pub selected: StyleStack,
    pub error: StyleStack,
    pub marked: StyleStack,
    pub copied: StyleStack,
    pub tag_marker: StyleStack,
    pub tagged: StyleStack,
    pub infostring: StyleStack,
    pub inactive_pane: StyleStack,
}

impl Default for BrowserStyles {
    fn default() -> Self {
        use BaseColor::*;
        Self {
            selected: StyleStack::new()
                .bright(true)
                .bold(true)
                .dim(false)
                .reverse(true),
            error: base(Red).bright(true).bold(true),
            marked: base(Yellow)
                .bg(ColorValue::Default)
                .bright(true)
                .bold(true)
                .underline(false),
            copied: base(Black)
                .bg(ColorValue::Default)
                .bright(true)
                .bold(true)
                .underline(false),
            tag_marker: base(Red).bright(true).bold(true),
            tagged: StyleStack::new(),
            infostring: StyleStack::new(),
            inactive_pane: base(Cyan).bg(ColorValue::Default),
        }
    }
}

/// Prototypes for the title bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStyles {
    /// Region base, copied before any sub-dispatch.
    pub base: StyleStack,
    pub hostname: StyleStack,
    pub hostname_bad: StyleStack,
    pub directory: StyleStack,
    pub link: StyleStack,
    pub file: StyleStack,
    pub keybuffer: StyleStack,
    pub tab: StyleStack,
    pub tab_good: StyleStack,
}

impl Default for TitleStyles {
    fn default() -> Self {
        use BaseColor::*;
        Self {
            base: StyleStack::new().bright(true).bold(true),
            hostname: base(Green),
            hostname_bad: base(Red),
            directory: base(Blue),
            link: base(Cyan),
            file: StyleStack::new(),
            keybuffer: StyleStack::new(),
            tab: StyleStack::new(),
            tab_good: StyleStack::new().bg(ColorValue::Base(Green)),
        }
    }
}

/// Prototypes for the status bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusStyles {
    /// Region base, copied before any sub-dispatch.
    pub base: StyleStack,
    pub text: StyleStack,
    pub text_highlight: StyleStack,
    pub permissions: StyleStack,
    pub permissions_bad: StyleStack,
    pub nlink: StyleStack,
    pub owner: StyleStack,
    pub group: StyleStack,
    pub mtime: StyleStack,
    pub percentage: StyleStack,
    pub marked: StyleStack,
    pub frozen: StyleStack,
    pub message: StyleStack,
    pub message_bad: StyleStack,
    pub vcsinfo: StyleStack,
    pub vcscommit: StyleStack,
    pub vcsdate: StyleStack,
    pub progress_bar: StyleStack,
}

impl Default for StatusStyles {
    fn default() -> Self {
        use BaseColor::*;
        Self {
            base: StyleStack::new(),
            text: StyleStack::new().reverse(false),
            text_highlight: StyleStack::new().reverse(true),
            permissions: base(Cyan),
            permissions_bad: base(Magenta),
            nlink: StyleStack::new(),
            owner: StyleStack::new(),
            group: StyleStack::new(),
            mtime: StyleStack::new(),
            percentage: StyleStack::new(),
            marked: base(Yellow).bright(true).bold(true).reverse(true),
            frozen: base(Cyan).bright(true).bold(true).reverse(true),
            message: StyleStack::new(),
            message_bad: base(Red).bright(true).bold(true),
            vcsinfo: base(Blue),
            vcscommit: base(Yellow),
            vcsdate: base(Cyan),
            progress_bar: base(White)
                .bg(ColorValue::Base(Blue))
                .bright(false)
                .dim(false)
                .reverse(false),
        }
    }
}

/// Prototypes for the task view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStyles {
    pub title: StyleStack,
    pub error: StyleStack,
    pub selected: StyleStack,
    pub progress_bar: StyleStack,
}

impl Default for TaskStyles {
    fn default() -> Self {
        use BaseColor::*;
        Self {
            title: base(Blue),
            error: base(Red),
            selected: StyleStack::new().reverse(true),
            progress_bar: base(White)
                .bg(ColorValue::Base(Blue))
                .bright(false)
                .dim(false)
                .reverse(false),
        }
    }
}

/// Prototypes for the version-control overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsStyles {
    /// Shared base added together with every matched status category.
    pub status: StyleStack,
    pub ignored: StyleStack,
    pub untracked: StyleStack,
    pub unknown: StyleStack,
    pub conflict: StyleStack,
    pub changed: StyleStack,
    pub staged: StyleStack,
    pub sync: StyleStack,
    pub none: StyleStack,
    pub behind: StyleStack,
    pub ahead: StyleStack,
    pub diverged: StyleStack,
}

impl Default for VcsStyles {
    fn default() -> Self {
        use BaseColor::*;
        Self {
            status: StyleStack::new().bright(false).bold(false).underline(false),
            ignored: StyleStack::new().fg(ColorValue::Default),
            untracked: base(Cyan),
            unknown: base(Red),
            conflict: base(Magenta),
            changed: base(Red),
            staged: base(Green),
            sync: base(Green),
            none: base(Green),
            behind: base(Red),
            ahead: base(Blue),
            diverged: base(Magenta),
        }
    }
}

/// A complete set of style prototypes.
///
/// # Example
///
/// ```
/// use undertone::{BaseColor, ColorValue, Scheme, StyleStack};
///
/// // Derive a custom scheme from the stock one.
/// let mut scheme = Scheme::default();
/// scheme.files.directory = StyleStack::new()
///     .fg(ColorValue::Palette(111))
///     .bold(true);
/// assert!(scheme.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheme {
    pub files: FileKindStyles,
    pub browser: BrowserStyles,
    pub titlebar: TitleStyles,
    pub statusbar: StatusStyles,
    pub taskview: TaskStyles,
    pub vcs: VcsStyles,
}

impl Scheme {
    /// Checks every prototype for definition-time mistakes.
    ///
    /// The bright transform is defined only for the eight base colors.
    /// A prototype pairing `bright: true` with a raw palette foreground
    /// would silently lose the brightening at finalize time, so it is
    /// rejected here instead.
    pub fn validate(&self) -> Result<(), SchemeError> {
        for (group, name, proto) in self.prototypes() {
            if proto.bright == Some(true) {
                if let Some(ColorValue::Palette(_)) = proto.fg {
                    return Err(SchemeError::BrightOnPalette {
                        group: group.to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn prototypes(&self) -> impl Iterator<Item = (&'static str, &'static str, &StyleStack)> {
        let files = [
            ("directory", &self.files.directory),
            ("link", &self.files.link),
            ("link_bad", &self.files.link_bad),
            ("socket", &self.files.socket),
            ("fifo", &self.files.fifo),
            ("device", &self.files.device),
            ("file", &self.files.file),
            ("executable", &self.files.executable),
            ("container", &self.files.container),
            ("document", &self.files.document),
            ("video", &self.files.video),
            ("audio", &self.files.audio),
            ("image", &self.files.image),
            ("media", &self.files.media),
        ];
        let browser = [
            ("selected", &self.browser.selected),
            ("error", &self.browser.error),
            ("marked", &self.browser.marked),
            ("copied", &self.browser.copied),
            ("tag_marker", &self.browser.tag_marker),
            ("tagged", &self.browser.tagged),
            ("infostring", &self.browser.infostring),
            ("inactive_pane", &self.browser.inactive_pane),
        ];
        let titlebar = [
            ("base", &self.titlebar.base),
            ("hostname", &self.titlebar.hostname),
            ("hostname_bad", &self.titlebar.hostname_bad),
            ("directory", &self.titlebar.directory),
            ("link", &self.titlebar.link),
            ("file", &self.titlebar.file),
            ("keybuffer", &self.titlebar.keybuffer),
            ("tab", &self.titlebar.tab),
            ("tab_good", &self.titlebar.tab_good),
        ];
        let statusbar = [
            ("base", &self.statusbar.base),
            ("text", &self.statusbar.text),
            ("text_highlight", &self.statusbar.text_highlight),
            ("permissions", &self.statusbar.permissions),
            ("permissions_bad", &self.statusbar.permissions_bad),
            ("nlink", &self.statusbar.nlink),
            ("owner", &self.statusbar.owner),
            ("group", &self.statusbar.group),
            ("mtime", &self.statusbar.mtime),
            ("percentage", &self.statusbar.percentage),
            ("marked", &self.statusbar.marked),
            ("frozen", &self.statusbar.frozen),
            ("message", &self.statusbar.message),
            ("message_bad", &self.statusbar.message_bad),
            ("vcsinfo", &self.statusbar.vcsinfo),
            ("vcscommit", &self.statusbar.vcscommit),
            ("vcsdate", &self.statusbar.vcsdate),
            ("progress_bar", &self.statusbar.progress_bar),
        ];
        let taskview = [
            ("title", &self.taskview.title),
            ("error", &self.taskview.error),
            ("selected", &self.taskview.selected),
            ("progress_bar", &self.taskview.progress_bar),
        ];
        let vcs = [
            ("status", &self.vcs.status),
            ("ignored", &self.vcs.ignored),
            ("untracked", &self.vcs.untracked),
            ("unknown", &self.vcs.unknown),
            ("conflict", &self.vcs.conflict),
            ("changed", &self.vcs.changed),
            ("staged", &self.vcs.staged),
            ("sync", &self.vcs.sync),
            ("none", &self.vcs.none),
            ("behind", &self.vcs.behind),
            ("ahead", &self.vcs.ahead),
            ("diverged", &self.vcs.diverged),
        ];
        files
            .into_iter()
            .map(|(n, p)| ("files", n, p))
            .chain(browser.into_iter().map(|(n, p)| ("browser", n, p)))
            .chain(titlebar.into_iter().map(|(n, p)| ("titlebar", n, p)))
            .chain(statusbar.into_iter().map(|(n, p)| ("statusbar", n, p)))
            .chain(taskview.into_iter().map(|(n, p)| ("taskview", n, p)))
            .chain(vcs.into_iter().map(|(n, p)| ("vcs", n, p)))
    }
}

static DEFAULT_SCHEME: Lazy<Scheme> = Lazy::new(Scheme::default);

/// The process-wide stock scheme, constructed on first use and shared
/// read-only thereafter.
pub fn default_scheme() -> &'static Scheme {
    &DEFAULT_SCHEME
}

/// Error from [`Scheme::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// A prototype asks to brighten a raw palette index, which has no
    /// bright variant.
    BrightOnPalette { group: String, name: String },
}

impl std::fmt::Display for SchemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemeError::BrightOnPalette { group, name } => {
                write!(
                    f,
                    "prototype '{}.{}' sets bright on a palette-index foreground",
                    group, name
                )
            }
        }
    }
}

impl std::error::Error for SchemeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attr;

    #[test]
    fn test_default_scheme_validates() {
        assert!(Scheme::default().validate().is_ok());
        assert!(default_scheme().validate().is_ok());
    }

    #[test]
    fn test_default_scheme_is_shared() {
        assert!(std::ptr::eq(default_scheme(), default_scheme()));
    }

    #[test]
    fn test_directory_prototype_finalizes_to_stock_look() {
        let resolved = Scheme::default().files.directory.finalize();
        assert_eq!(resolved.fg, ColorValue::Bright(BaseColor::Blue));
        assert_eq!(resolved.attrs, Attr::BOLD);
    }

    #[test]
    fn test_validate_rejects_bright_palette_prototype() {
        let mut scheme = Scheme::default();
        scheme.files.image = StyleStack::new()
            .fg(ColorValue::Palette(207))
            .bright(true);
        let err = scheme.validate().unwrap_err();
        assert_eq!(
            err,
            SchemeError::BrightOnPalette {
                group: "files".to_string(),
                name: "image".to_string(),
            }
        );
        assert!(err.to_string().contains("files.image"));
    }

    #[test]
    fn test_validate_allows_bright_without_fg() {
        // Overlays like `selected` brighten whatever foreground the base
        // layer chose; that is legitimate.
        assert_eq!(Scheme::default().browser.selected.bright, Some(true));
        assert!(Scheme::default().validate().is_ok());
    }

    #[test]
    fn test_scheme_serde_round_trip() {
        let scheme = Scheme::default();
        let json = serde_json::to_string(&scheme).unwrap();
        let back: Scheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scheme);
    }

    #[test]
    fn test_sparse_scheme_config_inherits_defaults() {
        let json = r#"{"files": {"directory": {"fg": {"palette": 111}, "bold": true}}}"#;
        let scheme: Scheme = serde_json::from_str(json).unwrap();
        assert_eq!(scheme.files.directory.fg, Some(ColorValue::Palette(111)));
        // Untouched prototypes keep their stock values.
        assert_eq!(scheme.files.link, FileKindStyles::default().link);
        assert_eq!(scheme.statusbar, StatusStyles::default());
    }
}
