//! Page, frame and layer extraction (`pg_`) for multi-page documents,
//! animations and Photoshop files.

use std::fmt;

use super::{component_from_action, Action};

/// Which pages, frames or layers to extract.
///
/// Numbers and ranges join with `;` (`1;3;5-7`); named layers render as
/// `name:a;b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelector {
    Pages(Vec<String>),
    Names(Vec<String>),
}

impl PageSelector {
    pub fn number(page: u32) -> Self {
        PageSelector::Pages(vec![page.to_string()])
    }

    /// Inclusive range: `from-to`.
    pub fn range(from: u32, to: u32) -> Self {
        PageSelector::Pages(vec![format!("{from}-{to}")])
    }

    /// Open-ended range: `from-`.
    pub fn starting_at(from: u32) -> Self {
        PageSelector::Pages(vec![format!("{from}-")])
    }

    pub fn names(names: &[&str]) -> Self {
        PageSelector::Names(names.iter().map(|n| n.to_string()).collect())
    }

    /// Combine two selectors of the same kind. Mixing numbers with names
    /// keeps the left-hand selector.
    pub fn and(self, other: PageSelector) -> Self {
        match (self, other) {
            (PageSelector::Pages(mut a), PageSelector::Pages(b)) => {
                a.extend(b);
                PageSelector::Pages(a)
            }
            (PageSelector::Names(mut a), PageSelector::Names(b)) => {
                a.extend(b);
                PageSelector::Names(a)
            }
            (left, _) => left,
        }
    }
}

impl fmt::Display for PageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSelector::Pages(pages) => f.write_str(&pages.join(";")),
            PageSelector::Names(names) => write!(f, "name:{}", names.join(";")),
        }
    }
}

/// Extraction of pages or animation frames.
pub struct Extract;

impl Extract {
    pub fn get_page(pages: PageSelector) -> Action {
        Action::new().with("pg", pages.to_string())
    }

    /// Frames of an animated image use the same qualifier as pages.
    pub fn get_frame(frames: PageSelector) -> Action {
        Self::get_page(frames)
    }
}

/// Photoshop specific extraction: clipping paths, layers and smart objects.
#[derive(Debug, Clone)]
pub struct PsdTools {
    action: Action,
}

impl PsdTools {
    /// Clip by the first clipping path.
    pub fn clip() -> Self {
        Self {
            action: Action::new().with_flag("clip"),
        }
    }

    /// Clip using the even-odd fill rule.
    pub fn clip_evenodd() -> Self {
        Self {
            action: Action::new().with_flag("clip_evenodd"),
        }
    }

    /// Clip by a named path.
    pub fn path_name(mut self, name: &str) -> Self {
        self.action.set("pg", format!("name:{name}"));
        self
    }

    /// Clip by a path number.
    pub fn path_number(mut self, number: u32) -> Self {
        self.action.set("pg", number);
        self
    }

    pub fn get_layer(layers: PageSelector) -> Self {
        Self {
            action: Extract::get_page(layers),
        }
    }

    /// An embedded smart object by index.
    pub fn smart_object(index: u32) -> Self {
        Self {
            action: Action::new().with("pg", format!("embedded:{index}")),
        }
    }

    pub fn smart_object_named(name: &str) -> Self {
        Self {
            action: Action::new().with("pg", format!("embedded:name:{name}")),
        }
    }
}

impl From<PsdTools> for Action {
    fn from(p: PsdTools) -> Self {
        p.action
    }
}

component_from_action!(PsdTools);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_selection() {
        assert_eq!(Extract::get_page(PageSelector::number(2)).to_string(), "pg_2");
        let pages = PageSelector::number(1)
            .and(PageSelector::range(3, 5))
            .and(PageSelector::starting_at(8));
        assert_eq!(Extract::get_page(pages).to_string(), "pg_1;3-5;8-");
        assert_eq!(Extract::get_frame(PageSelector::range(1, 4)).to_string(), "pg_1-4");
    }

    #[test]
    fn named_layers() {
        let layers = PsdTools::get_layer(PageSelector::names(&["record_cover", "Shadow"]));
        assert_eq!(Action::from(layers).to_string(), "pg_name:record_cover;Shadow");
    }

    #[test]
    fn clipping_paths() {
        assert_eq!(Action::from(PsdTools::clip()).to_string(), "fl_clip");
        assert_eq!(
            Action::from(PsdTools::clip().path_name("outline")).to_string(),
            "fl_clip,pg_name:outline"
        );
        assert_eq!(
            Action::from(PsdTools::clip_evenodd().path_number(2)).to_string(),
            "fl_clip_evenodd,pg_2"
        );
    }

    #[test]
    fn smart_objects() {
        assert_eq!(Action::from(PsdTools::smart_object(1)).to_string(), "pg_embedded:1");
        assert_eq!(
            Action::from(PsdTools::smart_object_named("logo")).to_string(),
            "pg_embedded:name:logo"
        );
    }
}
