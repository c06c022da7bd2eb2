//! The input side of resolution: what is currently being drawn.
//!
//! A [`ContextDescriptor`] is a bag of boolean facts the host renderer
//! assembles for each drawable unit (one screen cell or line). Every flag
//! defaults to false; the resolver reads the descriptor and never mutates
//! it. Flags can be set directly on the public fields or by name through
//! [`ContextDescriptor::set`], which silently ignores unrecognized keys so
//! collaborators can emit flags from an open vocabulary.
//!
//! The [`Classifier`] trait is the boundary for content classification:
//! hosts run their classifier over a filename to fold extra kind flags into
//! the descriptor before calling the resolver.

use std::collections::HashMap;

use serde::Deserialize;

/// Boolean facts about the unit being drawn.
///
/// The region flags (`in_browser`, `in_titlebar`, `in_statusbar`,
/// `in_taskview`) are expected to be mutually exclusive; if several are set,
/// the resolver honors the first in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextDescriptor {
    // Region.
    pub reset: bool,
    pub in_browser: bool,
    pub in_titlebar: bool,
    pub in_statusbar: bool,
    pub in_taskview: bool,

    // File and content kind.
    pub empty: bool,
    pub error: bool,
    pub badinfo: bool,
    pub link: bool,
    pub good: bool,
    pub fifo: bool,
    pub device: bool,
    pub socket: bool,
    pub directory: bool,
    pub executable: bool,
    pub container: bool,
    pub document: bool,
    pub video: bool,
    pub audio: bool,
    pub image: bool,
    pub media: bool,
    pub file: bool,
    pub border: bool,

    // Interaction state.
    pub selected: bool,
    pub tag_marker: bool,
    pub marked: bool,
    pub cut: bool,
    pub copied: bool,
    pub tagged: bool,
    pub infostring: bool,
    pub inactive_pane: bool,
    pub main_column: bool,

    // Titlebar.
    pub hostname: bool,
    pub bad: bool,
    pub keybuffer: bool,
    pub tab: bool,

    // Statusbar.
    pub permissions: bool,
    pub nlink: bool,
    pub owner: bool,
    pub group: bool,
    pub mtime: bool,
    pub all: bool,
    pub bot: bool,
    pub top: bool,
    pub percentage: bool,
    pub frozen: bool,
    pub message: bool,
    pub vcsinfo: bool,
    pub vcscommit: bool,
    pub vcsdate: bool,
    pub text: bool,
    pub highlight: bool,
    pub loaded: bool,

    // Task view.
    pub title: bool,

    // Version control.
    pub vcsfile: bool,
    pub vcsremote: bool,
    pub vcsconflict: bool,
    pub vcsuntracked: bool,
    pub vcschanged: bool,
    pub vcsunknown: bool,
    pub vcsstaged: bool,
    pub vcssync: bool,
    pub vcsignored: bool,
    pub vcsnone: bool,
    pub vcsbehind: bool,
    pub vcsahead: bool,
    pub vcsdiverged: bool,
}

impl ContextDescriptor {
    /// A descriptor with every flag false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a flag by name.
    ///
    /// Returns true if the key was recognized; unrecognized keys are
    /// ignored and return false, so collaborators may freely emit flags
    /// this engine does not know about.
    pub fn set(&mut self, key: &str, value: bool) -> bool {
        let slot: &mut bool = match key {
            "reset" => &mut self.reset,
            "in_browser" => &mut self.in_browser,
            "in_titlebar" => &mut self.in_titlebar,
            "in_statusbar" => &mut self.in_statusbar,
            "in_taskview" => &mut self.in_taskview,
            "empty" => &mut self.empty,
            "error" => &mut self.error,
            "badinfo" => &mut self.badinfo,
            "link" => &mut self.link,
            "good" => &mut self.good,
            "fifo" => &mut self.fifo,
            "device" => &mut self.device,
            "socket" => &mut self.socket,
            "directory" => &mut self.directory,
            "executable" => &mut self.executable,
            "container" => &mut self.container,
            "document" => &mut self.document,
            "video" => &mut self.video,
            "audio" => &mut self.audio,
            "image" => &mut self.image,
            "media" => &mut self.media,
            "file" => &mut self.file,
            "border" => &mut self.border,
            "selected" => &mut self.selected,
            "tag_marker" => &mut self.tag_marker,
            "marked" => &mut self.marked,
            "cut" => &mut self.cut,
            "copied" => &mut self.copied,
            "tagged" => &mut self.tagged,
            "infostring" => &mut self.infostring,
            "inactive_pane" => &mut self.inactive_pane,
            "main_column" => &mut self.main_column,
            "hostname" => &mut self.hostname,
            "bad" => &mut self.bad,
            "keybuffer" => &mut self.keybuffer,
            "tab" => &mut self.tab,
            "permissions" => &mut self.permissions,
            "nlink" => &mut self.nlink,
            "owner" => &mut self.owner,
            "group" => &mut self.group,
            "mtime" => &mut self.mtime,
            "all" => &mut self.all,
            "bot" => &mut self.bot,
            "top" => &mut self.top,
            "percentage" => &mut self.percentage,
            "frozen" => &mut self.frozen,
            "message" => &mut self.message,
            "vcsinfo" => &mut self.vcsinfo,
            "vcscommit" => &mut self.vcscommit,
            "vcsdate" => &mut self.vcsdate,
            "text" => &mut self.text,
            "highlight" => &mut self.highlight,
            "loaded" => &mut self.loaded,
            "title" => &mut self.title,
            "vcsfile" => &mut self.vcsfile,
            "vcsremote" => &mut self.vcsremote,
            "vcsconflict" => &mut self.vcsconflict,
            "vcsuntracked" => &mut self.vcsuntracked,
            "vcschanged" => &mut self.vcschanged,
            "vcsunknown" => &mut self.vcsunknown,
            "vcsstaged" => &mut self.vcsstaged,
            "vcssync" => &mut self.vcssync,
            "vcsignored" => &mut self.vcsignored,
            "vcsnone" => &mut self.vcsnone,
            "vcsbehind" => &mut self.vcsbehind,
            "vcsahead" => &mut self.vcsahead,
            "vcsdiverged" => &mut self.vcsdiverged,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Maps a filename to extra context flags before resolution.
///
/// This replaces ad-hoc patching of the host's draw hooks: the host runs
/// its classifier explicitly while building the descriptor, and the
/// resolver stays a pure function of the descriptor alone.
pub trait Classifier {
    /// Folds content-kind flags for `name` into `ctx`.
    fn classify(&self, name: &str, ctx: &mut ContextDescriptor);
}

/// A [`Classifier`] backed by an extension-to-flags table.
///
/// The table is supplied by the host (programmatically or deserialized
/// from config); this crate does not ship a populated one. Extensions are
/// matched case-insensitively against the final `.`-separated component.
///
/// # Example
///
/// ```
/// use undertone::{Classifier, ContextDescriptor, ExtensionClassifier};
///
/// let classifier = ExtensionClassifier::new()
///     .map_ext("md", "document")
///     .map_ext("flac", "audio");
///
/// let mut ctx = ContextDescriptor::new();
/// classifier.classify("notes.md", &mut ctx);
/// assert!(ctx.document);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ExtensionClassifier {
    flags_by_ext: HashMap<String, Vec<String>>,
}

impl ExtensionClassifier {
    /// An empty classifier that maps nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps an extension to a flag name, returning the updated classifier
    /// for chaining. One extension may map to several flags.
    pub fn map_ext(mut self, ext: &str, flag: &str) -> Self {
        self.flags_by_ext
            .entry(ext.to_ascii_lowercase())
            .or_default()
            .push(flag.to_string());
        self
    }
}

impl Classifier for ExtensionClassifier {
    fn classify(&self, name: &str, ctx: &mut ContextDescriptor) {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return;
        };
        if let Some(flags) = self.flags_by_ext.get(&ext.to_ascii_lowercase()) {
            for flag in flags {
                ctx.set(flag, true);
            }
        }
    }
}
