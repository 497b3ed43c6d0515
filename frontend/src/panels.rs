use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceEntry {
    pub kicker: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub cards: Vec<ServiceCard>,
    // accent colour name, only used for styling
    #[serde(default)]
    pub tint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub is_open: bool,
}

/// Collapsible service panels. Every entry keeps its own open flag, opening
/// one panel never closes another.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelList {
    entries: Vec<ServiceEntry>,
    states: Vec<PanelState>,
}

/// What a single panel needs to render itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelView<'a> {
    pub index: usize,
    pub entry: &'a ServiceEntry,
    pub is_open: bool,
}

impl<'a> PanelView<'a> {
    pub fn chevron_class(&self) -> &'static str {
        if self.is_open { "chevron open" } else { "chevron" }
    }

    /// Cards of the detail grid, empty while the panel is collapsed.
    pub fn cards(&self) -> &'a [ServiceCard] {
        if self.is_open { &self.entry.cards } else { &[] }
    }
}

impl PanelList {
    pub fn new(entries: Vec<ServiceEntry>) -> Self {
        let states = vec![PanelState::default(); entries.len()];
        Self { entries, states }
    }

    /// Flips the panel at `index`. Returns false and changes nothing when the
    /// index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state) => {
                state.is_open = !state.is_open;
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.states.get(index).map_or(false, |s| s.is_open)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_open).count()
    }

    pub fn panels(&self) -> impl Iterator<Item = PanelView<'_>> {
        self.entries
            .iter()
            .zip(self.states.iter())
            .enumerate()
            .map(|(index, (entry, state))| PanelView {
                index,
                entry,
                is_open: state.is_open,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, cards: usize) -> ServiceEntry {
        ServiceEntry {
            kicker: format!("{} kicker", title),
            title: title.to_string(),
            body: format!("{} body", title),
            cards: (0..cards)
                .map(|i| ServiceCard {
                    title: format!("card {}", i),
                    desc: format!("desc {}", i),
                })
                .collect(),
            tint: None,
        }
    }

    fn three_panels() -> PanelList {
        PanelList::new(vec![entry("A", 4), entry("B", 2), entry("C", 0)])
    }

    #[test]
    fn starts_with_every_panel_closed() {
        let panels = three_panels();
        assert_eq!(panels.len(), 3);
        assert_eq!(panels.open_count(), 0);
        assert!(panels.panels().all(|p| !p.is_open));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut panels = three_panels();
        for index in 0..panels.len() {
            let before = panels.is_open(index);
            panels.toggle(index);
            assert_ne!(panels.is_open(index), before);
            panels.toggle(index);
            assert_eq!(panels.is_open(index), before);
        }

        panels.toggle(1);
        panels.toggle(1);
        panels.toggle(1);
        assert!(panels.is_open(1));
    }

    #[test]
    fn toggling_one_panel_leaves_others_alone() {
        let mut panels = three_panels();
        panels.toggle(0);
        panels.toggle(2);
        assert!(panels.is_open(0));
        assert!(!panels.is_open(1));
        assert!(panels.is_open(2));
        assert_eq!(panels.open_count(), 2);

        panels.toggle(2);
        assert!(panels.is_open(0));
        assert!(!panels.is_open(1));
        assert!(!panels.is_open(2));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut panels = three_panels();
        panels.toggle(1);
        let before = panels.clone();
        assert!(!panels.toggle(3));
        assert!(!panels.toggle(usize::MAX));
        assert_eq!(panels, before);
        assert!(!panels.is_open(42));
    }

    #[test]
    fn detail_cards_only_while_open() {
        let mut panels = three_panels();
        assert!(panels.panels().all(|p| p.cards().is_empty()));

        panels.toggle(0);
        panels.toggle(2);
        let views: Vec<_> = panels.panels().collect();
        assert_eq!(views[0].cards().len(), 4);
        assert_eq!(views[0].cards()[3].title, "card 3");
        assert_eq!(views[0].chevron_class(), "chevron open");
        assert!(views[1].cards().is_empty());
        assert_eq!(views[1].chevron_class(), "chevron");
        // open but with no cards renders an empty grid
        assert!(views[2].is_open);
        assert!(views[2].cards().is_empty());
    }

    #[test]
    fn empty_list_renders_nothing() {
        let mut panels = PanelList::new(Vec::new());
        assert!(panels.is_empty());
        assert!(!panels.toggle(0));
        assert_eq!(panels.panels().count(), 0);
    }

    #[test]
    fn views_keep_entry_order() {
        let panels = three_panels();
        let titles: Vec<_> = panels.panels().map(|p| p.entry.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        let indexes: Vec<_> = panels.panels().map(|p| p.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }
}
