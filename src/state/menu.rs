use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Search,
    Categories,
    Languages,
    Account,
}

impl Overlay {
    pub const ALL: [Overlay; 4] = [
        Overlay::Search,
        Overlay::Categories,
        Overlay::Languages,
        Overlay::Account,
    ];

    /// The language and account panels share a corner of the screen, so opening one
    /// from its trigger hides the other.
    fn rival(self) -> Option<Overlay> {
        match self {
            Overlay::Languages => Some(Overlay::Account),
            Overlay::Account => Some(Overlay::Languages),
            Overlay::Search | Overlay::Categories => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub search: bool,
    pub categories: bool,
    pub languages: bool,
    pub account: bool,
}

impl OverlayState {
    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Search => self.search,
            Overlay::Categories => self.categories,
            Overlay::Languages => self.languages,
            Overlay::Account => self.account,
        }
    }

    fn set(&mut self, overlay: Overlay, open: bool) {
        match overlay {
            Overlay::Search => self.search = open,
            Overlay::Categories => self.categories = open,
            Overlay::Languages => self.languages = open,
            Overlay::Account => self.account = open,
        }
    }
}

/// Where a pointer-down landed relative to one rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Containment {
    #[default]
    Unmounted,
    Outside,
    Inside,
}

impl Containment {
    pub fn from_contains(mounted: bool, contains: bool) -> Self {
        match (mounted, contains) {
            (false, _) => Containment::Unmounted,
            (true, false) => Containment::Outside,
            (true, true) => Containment::Inside,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayHit {
    pub panel: Containment,
    pub trigger: Containment,
}

impl OverlayHit {
    // Unmounted counts as outside: a panel with nothing left on screen to click must not stay open.
    fn is_outside(&self) -> bool {
        self.panel != Containment::Inside && self.trigger != Containment::Inside
    }
}

/// Snapshot of one pointer-down against every overlay's registered regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionHits {
    search: OverlayHit,
    categories: OverlayHit,
    languages: OverlayHit,
    account: OverlayHit,
}

impl RegionHits {
    pub fn with(mut self, overlay: Overlay, hit: OverlayHit) -> Self {
        match overlay {
            Overlay::Search => self.search = hit,
            Overlay::Categories => self.categories = hit,
            Overlay::Languages => self.languages = hit,
            Overlay::Account => self.account = hit,
        }
        self
    }

    pub fn get(&self, overlay: Overlay) -> OverlayHit {
        match overlay {
            Overlay::Search => self.search,
            Overlay::Categories => self.categories,
            Overlay::Languages => self.languages,
            Overlay::Account => self.account,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPart {
    Trigger,
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CategoriesHover {
    trigger: bool,
    panel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuCoordinator {
    overlays: OverlayState,
    hover: CategoriesHover,
}

impl MenuCoordinator {
    pub fn overlays(&self) -> OverlayState {
        self.overlays
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.overlays.is_open(overlay)
    }

    pub fn open(&mut self, overlay: Overlay) {
        self.overlays.set(overlay, true);
    }

    pub fn close(&mut self, overlay: Overlay) {
        self.overlays.set(overlay, false);
        if overlay == Overlay::Categories {
            self.hover = CategoriesHover::default();
        }
    }

    pub fn toggle(&mut self, overlay: Overlay) {
        if self.is_open(overlay) {
            self.close(overlay);
        } else {
            self.open(overlay);
        }
        if let Some(rival) = overlay.rival() {
            self.close(rival);
        }
        debug!("Toggled {:?}: {:?}", overlay, self.overlays);
    }

    pub fn pointer_enter(&mut self, part: HoverPart) {
        match part {
            HoverPart::Trigger => self.hover.trigger = true,
            HoverPart::Panel => self.hover.panel = true,
        }
        self.overlays.categories = true;
    }

    pub fn pointer_leave(&mut self, part: HoverPart) {
        match part {
            HoverPart::Trigger => self.hover.trigger = false,
            HoverPart::Panel => self.hover.panel = false,
        }
        if !self.hover.trigger && !self.hover.panel {
            self.overlays.categories = false;
        }
    }

    /// Closes every open overlay the pointer-down missed. Returns the overlays it closed.
    pub fn outside_click(&mut self, hits: &RegionHits) -> Vec<Overlay> {
        let missed: Vec<Overlay> = Overlay::ALL
            .into_iter()
            .filter(|&overlay| self.is_open(overlay) && hits.get(overlay).is_outside())
            .collect();
        for &overlay in &missed {
            self.close(overlay);
        }
        missed
    }

    pub fn backdrop_visible(&self) -> bool {
        self.overlays.languages || self.overlays.account
    }

    pub fn click_backdrop(&mut self) {
        self.close(Overlay::Languages);
        self.close(Overlay::Account);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside_panel() -> OverlayHit {
        OverlayHit {
            panel: Containment::Inside,
            trigger: Containment::Outside,
        }
    }

    fn inside_trigger() -> OverlayHit {
        OverlayHit {
            panel: Containment::Outside,
            trigger: Containment::Inside,
        }
    }

    fn missed() -> OverlayHit {
        OverlayHit {
            panel: Containment::Outside,
            trigger: Containment::Outside,
        }
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        for overlay in Overlay::ALL {
            let mut menu = MenuCoordinator::default();
            menu.toggle(overlay);
            assert!(menu.is_open(overlay));
            menu.toggle(overlay);
            assert!(!menu.is_open(overlay));
        }
    }

    #[test]
    fn languages_and_account_exclude_each_other() {
        let mut menu = MenuCoordinator::default();
        menu.open(Overlay::Search);
        menu.open(Overlay::Categories);

        menu.toggle(Overlay::Languages);
        menu.toggle(Overlay::Account);
        assert!(menu.is_open(Overlay::Account));
        assert!(!menu.is_open(Overlay::Languages));

        menu.toggle(Overlay::Languages);
        assert!(menu.is_open(Overlay::Languages));
        assert!(!menu.is_open(Overlay::Account));

        assert!(menu.is_open(Overlay::Search));
        assert!(menu.is_open(Overlay::Categories));
    }

    #[test]
    fn outside_click_with_nothing_open_is_a_no_op() {
        let mut menu = MenuCoordinator::default();
        let before = menu;
        assert!(menu.outside_click(&RegionHits::default()).is_empty());
        assert_eq!(menu, before);
    }

    #[test]
    fn outside_click_closes_every_missed_overlay_in_one_pass() {
        let mut menu = MenuCoordinator::default();
        menu.open(Overlay::Search);
        menu.open(Overlay::Categories);
        menu.open(Overlay::Languages);

        let hits = RegionHits::default()
            .with(Overlay::Search, missed())
            .with(Overlay::Categories, missed())
            .with(Overlay::Languages, missed());
        let closed = menu.outside_click(&hits);

        assert_eq!(
            closed,
            vec![Overlay::Search, Overlay::Categories, Overlay::Languages]
        );
        assert_eq!(menu.overlays(), OverlayState::default());
    }

    #[test]
    fn clicks_on_panel_or_trigger_keep_overlay_open() {
        let mut menu = MenuCoordinator::default();
        menu.open(Overlay::Account);
        menu.open(Overlay::Search);

        let hits = RegionHits::default()
            .with(Overlay::Account, inside_trigger())
            .with(Overlay::Search, inside_panel());
        assert!(menu.outside_click(&hits).is_empty());

        let hits = RegionHits::default()
            .with(Overlay::Account, inside_panel())
            .with(Overlay::Search, missed());
        assert_eq!(menu.outside_click(&hits), vec![Overlay::Search]);
        assert!(menu.is_open(Overlay::Account));
    }

    #[test]
    fn overlay_with_nothing_mounted_gets_closed() {
        let mut menu = MenuCoordinator::default();
        menu.open(Overlay::Languages);
        // Default hits report both panel and trigger as unmounted.
        assert_eq!(
            menu.outside_click(&RegionHits::default()),
            vec![Overlay::Languages]
        );
    }

    #[test]
    fn categories_stays_open_while_pointer_moves_from_trigger_to_panel() {
        let mut menu = MenuCoordinator::default();
        menu.pointer_enter(HoverPart::Trigger);
        assert!(menu.is_open(Overlay::Categories));

        menu.pointer_enter(HoverPart::Panel);
        menu.pointer_leave(HoverPart::Trigger);
        assert!(menu.is_open(Overlay::Categories));

        menu.pointer_leave(HoverPart::Panel);
        assert!(!menu.is_open(Overlay::Categories));
    }

    #[test]
    fn backdrop_tracks_languages_and_account() {
        let mut menu = MenuCoordinator::default();
        menu.open(Overlay::Search);
        assert!(!menu.backdrop_visible());

        menu.toggle(Overlay::Account);
        assert!(menu.backdrop_visible());

        menu.click_backdrop();
        assert!(!menu.backdrop_visible());
        assert!(menu.is_open(Overlay::Search));
    }

    #[test]
    fn containment_from_dom_checks() {
        assert_eq!(Containment::from_contains(false, true), Containment::Unmounted);
        assert_eq!(Containment::from_contains(true, false), Containment::Outside);
        assert_eq!(Containment::from_contains(true, true), Containment::Inside);
    }
}
