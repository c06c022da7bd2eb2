//! The resolution rule engine.
//!
//! [`Scheme::resolve`] turns one [`ContextDescriptor`] into one
//! [`StyleAttributes`]. Dispatch is layered: a region base is established
//! with `copy`, then overlays compose onto it with `add`, then the
//! version-control overlay applies orthogonally to whichever region was
//! chosen. Every first-match chain below is evaluated in a documented
//! order; that order is part of the engine's contract, since reordering
//! the rules changes what wins ties.
//!
//! Resolution is total: any descriptor yields a style, with no error path.
//! It is also pure and reads only this scheme, so calling it concurrently
//! from many threads needs no synchronization.

use crate::context::ContextDescriptor;
use crate::scheme::{default_scheme, Scheme};
use crate::style::{StyleAttributes, StyleStack};

/// Resolves against the process-wide [`default_scheme`].
///
/// # Example
///
/// ```
/// use undertone::{resolve, Attr, BaseColor, ColorValue, ContextDescriptor};
///
/// let mut ctx = ContextDescriptor::new();
/// ctx.in_browser = true;
/// ctx.directory = true;
///
/// let style = resolve(&ctx);
/// assert_eq!(style.fg, ColorValue::Bright(BaseColor::Blue));
/// assert_eq!(style.attrs, Attr::BOLD);
/// ```
pub fn resolve(ctx: &ContextDescriptor) -> StyleAttributes {
    default_scheme().resolve(ctx)
}

/// Returns the first prototype whose predicate holds.
fn first_match<'a>(rules: &[(bool, &'a StyleStack)]) -> Option<&'a StyleStack> {
    rules.iter().find(|(hit, _)| *hit).map(|(_, proto)| *proto)
}

impl Scheme {
    /// Resolves a descriptor into a concrete display style.
    pub fn resolve(&self, ctx: &ContextDescriptor) -> StyleAttributes {
        if ctx.reset {
            return StyleAttributes::NEUTRAL;
        }

        let mut stack = StyleStack::new();

        // Regions are mutually exclusive; first match wins.
        if ctx.in_browser {
            self.browser_region(ctx, &mut stack);
        } else if ctx.in_titlebar {
            self.titlebar_region(ctx, &mut stack);
        } else if ctx.in_statusbar {
            self.statusbar_region(ctx, &mut stack);
        } else if ctx.in_taskview {
            self.taskview_region(ctx, &mut stack);
        }

        // Selection wins over version-control decoration.
        if !ctx.selected {
            self.vcs_overlay(ctx, &mut stack);
        }

        stack.finalize()
    }

    fn browser_region(&self, ctx: &ContextDescriptor, stack: &mut StyleStack) {
        // Base: file-kind dispatch. The specific kinds from `executable`
        // down compose onto the plain-file base.
        if ctx.empty || ctx.error || ctx.badinfo {
            stack.copy(&self.browser.error);
        } else if ctx.link {
            stack.copy(if ctx.good {
                &self.files.link
            } else {
                &self.files.link_bad
            });
        } else if ctx.fifo {
            stack.copy(&self.files.fifo);
        } else if ctx.device {
            stack.copy(&self.files.device);
        } else if ctx.socket {
            stack.copy(&self.files.socket);
        } else if ctx.directory {
            stack.copy(&self.files.directory);
        } else if ctx.executable {
            stack.copy(&self.files.file).add(&self.files.executable);
        } else if ctx.container {
            stack.copy(&self.files.file).add(&self.files.container);
        } else if ctx.document {
            stack.copy(&self.files.file).add(&self.files.document);
        } else if ctx.video {
            stack.copy(&self.files.file).add(&self.files.video);
        } else if ctx.audio {
            stack.copy(&self.files.file).add(&self.files.audio);
        } else if ctx.image {
            stack.copy(&self.files.file).add(&self.files.image);
        } else if ctx.media {
            stack.copy(&self.files.file).add(&self.files.media);
        } else if ctx.file {
            stack.copy(&self.files.file);
        }

        // Interaction overlay.
        let overlays = [
            (ctx.selected, &self.browser.selected),
            (ctx.tag_marker, &self.browser.tag_marker),
            (ctx.marked, &self.browser.marked),
            (ctx.cut || ctx.copied, &self.browser.copied),
            (ctx.tagged, &self.browser.tagged),
            (ctx.infostring, &self.browser.infostring),
        ];
        if let Some(proto) = first_match(&overlays) {
            stack.add(proto);
        }

        if ctx.inactive_pane {
            stack.add(&self.browser.inactive_pane);
        }
    }

    fn titlebar_region(&self, ctx: &ContextDescriptor, stack: &mut StyleStack) {
        stack.copy(&self.titlebar.base);

        let rules = [
            (
                ctx.hostname,
                if ctx.bad {
                    &self.titlebar.hostname_bad
                } else {
                    &self.titlebar.hostname
                },
            ),
            (ctx.directory, &self.titlebar.directory),
            (ctx.link, &self.titlebar.link),
            (ctx.file, &self.titlebar.file),
            (ctx.keybuffer, &self.titlebar.keybuffer),
            (
                ctx.tab,
                if ctx.good {
                    &self.titlebar.tab_good
                } else {
                    &self.titlebar.tab
                },
            ),
        ];
        if let Some(proto) = first_match(&rules) {
            stack.add(proto);
        }
    }

    fn statusbar_region(&self, ctx: &ContextDescriptor, stack: &mut StyleStack) {
        stack.copy(&self.statusbar.base);

        let rules = [
            (
                ctx.permissions,
                if ctx.good {
                    &self.statusbar.permissions
                } else {
                    &self.statusbar.permissions_bad
                },
            ),
            (ctx.nlink, &self.statusbar.nlink),
            (ctx.owner, &self.statusbar.owner),
            (ctx.group, &self.statusbar.group),
            (ctx.mtime, &self.statusbar.mtime),
            (ctx.marked, &self.statusbar.marked),
            (
                ctx.all || ctx.bot || ctx.top || ctx.percentage,
                &self.statusbar.percentage,
            ),
            (ctx.frozen, &self.statusbar.frozen),
            (
                ctx.message,
                if ctx.bad {
                    &self.statusbar.message_bad
                } else {
                    &self.statusbar.message
                },
            ),
            (ctx.vcsinfo, &self.statusbar.vcsinfo),
            (ctx.vcscommit, &self.statusbar.vcscommit),
            (ctx.vcsdate, &self.statusbar.vcsdate),
        ];
        if let Some(proto) = first_match(&rules) {
            stack.add(proto);
        }

        if ctx.text {
            stack.add(if ctx.highlight {
                &self.statusbar.text_highlight
            } else {
                &self.statusbar.text
            });
        }

        if ctx.loaded {
            stack.add(&self.statusbar.progress_bar);
        }
    }

    fn taskview_region(&self, ctx: &ContextDescriptor, stack: &mut StyleStack) {
        if ctx.error {
            stack.copy(&self.taskview.error);
        } else if ctx.title {
            stack.copy(&self.taskview.title);
        }

        if ctx.selected {
            stack.add(&self.taskview.selected);
        }

        if ctx.loaded {
            stack.add(&self.taskview.progress_bar);
        }
    }

    fn vcs_overlay(&self, ctx: &ContextDescriptor, stack: &mut StyleStack) {
        if ctx.vcsfile {
            let rules = [
                (ctx.vcsconflict, &self.vcs.conflict),
                (ctx.vcsuntracked, &self.vcs.untracked),
                (ctx.vcschanged, &self.vcs.changed),
                (ctx.vcsunknown, &self.vcs.unknown),
                (ctx.vcsstaged, &self.vcs.staged),
                (ctx.vcssync, &self.vcs.sync),
                (ctx.vcsignored, &self.vcs.ignored),
            ];
            if let Some(proto) = first_match(&rules) {
                stack.add(&self.vcs.status).add(proto);
            }
        } else if ctx.vcsremote {
            if ctx.vcssync || ctx.vcsnone {
                stack.add(&self.vcs.status).add(&self.vcs.sync);
            }
            let rules = [
                (ctx.vcsnone, &self.vcs.none),
                (ctx.vcsbehind, &self.vcs.behind),
                (ctx.vcsahead, &self.vcs.ahead),
                (ctx.vcsdiverged, &self.vcs.diverged),
                (ctx.vcsunknown, &self.vcs.unknown),
            ];
            if let Some(proto) = first_match(&rules) {
                stack.add(&self.vcs.status).add(proto);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attr;
    use crate::color::{BaseColor, ColorValue};

    fn browser(setup: impl FnOnce(&mut ContextDescriptor)) -> StyleAttributes {
        let mut ctx = ContextDescriptor::new();
        ctx.in_browser = true;
        setup(&mut ctx);
        resolve(&ctx)
    }

    #[test]
    fn test_region_dispatch_prefers_browser() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_browser = true;
        ctx.in_titlebar = true;
        ctx.directory = true;
        // Titlebar directory would be plain blue; browser wins.
        assert_eq!(resolve(&ctx).fg, ColorValue::Bright(BaseColor::Blue));
    }

    #[test]
    fn test_no_region_yields_neutral() {
        let ctx = ContextDescriptor::new();
        assert_eq!(resolve(&ctx), StyleAttributes::NEUTRAL);
    }

    #[test]
    fn test_browser_error_beats_file_kind() {
        let style = browser(|ctx| {
            ctx.error = true;
            ctx.directory = true;
        });
        assert_eq!(style.fg, ColorValue::Bright(BaseColor::Red));
        assert_eq!(style.attrs, Attr::BOLD);
    }

    #[test]
    fn test_browser_good_link() {
        let style = browser(|ctx| {
            ctx.link = true;
            ctx.good = true;
        });
        assert_eq!(style.fg, ColorValue::Bright(BaseColor::Cyan));
    }

    #[test]
    fn test_browser_specific_kind_composes_onto_file_base() {
        let mut scheme = Scheme::default();
        scheme.files.file = StyleStack::new().dim(true);
        let mut ctx = ContextDescriptor::new();
        ctx.in_browser = true;
        ctx.audio = true;
        let style = scheme.resolve(&ctx);
        assert_eq!(style.fg, ColorValue::Base(BaseColor::Cyan));
        assert!(style.attrs.contains(Attr::DIM));
    }

    #[test]
    fn test_browser_plain_file_fallback() {
        let style = browser(|ctx| ctx.file = true);
        assert_eq!(style, StyleAttributes::NEUTRAL);
    }

    #[test]
    fn test_browser_selected_overlay_beats_marked() {
        let style = browser(|ctx| {
            ctx.directory = true;
            ctx.selected = true;
            ctx.marked = true;
        });
        // Marked would have recolored to yellow; selection leaves fg alone.
        assert_eq!(style.fg, ColorValue::Bright(BaseColor::Blue));
        assert_eq!(style.attrs, Attr::BOLD | Attr::REVERSE);
    }

    #[test]
    fn test_browser_cut_and_copied_share_a_prototype() {
        let cut = browser(|ctx| {
            ctx.file = true;
            ctx.cut = true;
        });
        let copied = browser(|ctx| {
            ctx.file = true;
            ctx.copied = true;
        });
        assert_eq!(cut, copied);
        assert_eq!(cut.fg, ColorValue::Bright(BaseColor::Black));
    }

    #[test]
    fn test_browser_inactive_pane_applies_over_overlay() {
        let style = browser(|ctx| {
            ctx.directory = true;
            ctx.marked = true;
            ctx.inactive_pane = true;
        });
        assert_eq!(style.fg, ColorValue::Bright(BaseColor::Cyan));
    }

    #[test]
    fn test_titlebar_base_brightens_hostname() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_titlebar = true;
        ctx.hostname = true;
        let style = resolve(&ctx);
        assert_eq!(style.fg, ColorValue::Bright(BaseColor::Green));
        assert_eq!(style.attrs, Attr::BOLD);
    }

    #[test]
    fn test_titlebar_bad_hostname() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_titlebar = true;
        ctx.hostname = true;
        ctx.bad = true;
        assert_eq!(resolve(&ctx).fg, ColorValue::Bright(BaseColor::Red));
    }

    #[test]
    fn test_titlebar_good_tab_gets_green_background() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_titlebar = true;
        ctx.tab = true;
        ctx.good = true;
        assert_eq!(resolve(&ctx).bg, ColorValue::Base(BaseColor::Green));
    }

    #[test]
    fn test_statusbar_counter_group_aliases() {
        for key in ["all", "bot", "top", "percentage"] {
            let mut ctx = ContextDescriptor::new();
            ctx.in_statusbar = true;
            ctx.set(key, true);
            assert_eq!(resolve(&ctx), StyleAttributes::NEUTRAL);
        }
    }

    #[test]
    fn test_statusbar_text_layer_is_independent() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_statusbar = true;
        ctx.message = true;
        ctx.bad = true;
        ctx.text = true;
        ctx.highlight = true;
        let style = resolve(&ctx);
        assert_eq!(style.fg, ColorValue::Bright(BaseColor::Red));
        assert!(style.attrs.contains(Attr::REVERSE));
        assert!(style.attrs.contains(Attr::BOLD));
    }

    #[test]
    fn test_statusbar_progress_bar_overlay() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_statusbar = true;
        ctx.loaded = true;
        let style = resolve(&ctx);
        assert_eq!(style.fg, ColorValue::Base(BaseColor::White));
        assert_eq!(style.bg, ColorValue::Base(BaseColor::Blue));
    }

    #[test]
    fn test_taskview_error_beats_title() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_taskview = true;
        ctx.error = true;
        ctx.title = true;
        assert_eq!(resolve(&ctx).fg, ColorValue::Base(BaseColor::Red));
    }

    #[test]
    fn test_taskview_selected_reverses() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_taskview = true;
        ctx.title = true;
        ctx.selected = true;
        let style = resolve(&ctx);
        assert_eq!(style.fg, ColorValue::Base(BaseColor::Blue));
        assert!(style.attrs.contains(Attr::REVERSE));
    }

    #[test]
    fn test_vcs_file_status_order() {
        let style = browser(|ctx| {
            ctx.file = true;
            ctx.vcsfile = true;
            ctx.vcschanged = true;
            ctx.vcsstaged = true;
        });
        // changed outranks staged
        assert_eq!(style.fg, ColorValue::Base(BaseColor::Red));
    }

    #[test]
    fn test_vcs_decoration_keeps_earlier_attribute_truth() {
        // The shared status base clears bold for its own layer, but it
        // cannot subtract the bold the directory base already contributed.
        let style = browser(|ctx| {
            ctx.directory = true;
            ctx.vcsfile = true;
            ctx.vcsstaged = true;
        });
        assert_eq!(style.fg, ColorValue::Base(BaseColor::Green));
        assert!(style.attrs.contains(Attr::BOLD));
    }

    #[test]
    fn test_vcs_remote_none_gets_sync_then_none() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_statusbar = true;
        ctx.vcsremote = true;
        ctx.vcsnone = true;
        assert_eq!(resolve(&ctx).fg, ColorValue::Base(BaseColor::Green));
    }

    #[test]
    fn test_vcs_remote_behind() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_statusbar = true;
        ctx.vcsremote = true;
        ctx.vcsbehind = true;
        assert_eq!(resolve(&ctx).fg, ColorValue::Base(BaseColor::Red));
    }

    #[test]
    fn test_vcs_file_branch_shadows_remote_branch() {
        let mut ctx = ContextDescriptor::new();
        ctx.in_browser = true;
        ctx.file = true;
        ctx.vcsfile = true;
        ctx.vcsuntracked = true;
        ctx.vcsremote = true;
        ctx.vcsbehind = true;
        assert_eq!(resolve(&ctx).fg, ColorValue::Base(BaseColor::Cyan));
    }

    #[test]
    fn test_custom_scheme_resolves_with_own_prototypes() {
        let mut scheme = Scheme::default();
        scheme.files.directory = StyleStack::new().fg(ColorValue::Palette(111)).bold(true);
        let mut ctx = ContextDescriptor::new();
        ctx.in_browser = true;
        ctx.directory = true;
        let style = scheme.resolve(&ctx);
        assert_eq!(style.fg, ColorValue::Palette(111));
        assert_eq!(style.attrs, Attr::BOLD);
    }
}
