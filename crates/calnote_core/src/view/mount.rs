//! Mount boundary: a YAML view block selects which view to construct.
//!
//! ```text
//! type: weekly
//! ```
//!
//! The block may also arrive still wrapped in its `calnote` code fence.

use crate::model::ViewId;
use crate::store::NoteStore;
use crate::view::context::ViewContext;
use crate::view::daily::{DailyModel, DailyView};
use crate::view::weekly::{WeeklyModel, WeeklyView};
use crate::view::year::{YearModel, YearView};
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// Fenced code-block language a host registers for view blocks.
pub const VIEW_BLOCK_LANGUAGE: &str = "calnote";

const VIEW_KINDS: &[(&str, ViewKind)] = &[
    ("daily", ViewKind::Daily),
    ("weekly", ViewKind::Weekly),
    ("year", ViewKind::Year),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Daily,
    Weekly,
    Year,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        VIEW_KINDS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("unknown", |(name, _)| *name)
    }

    pub fn all() -> impl Iterator<Item = ViewKind> {
        VIEW_KINDS.iter().map(|(_, kind)| *kind)
    }
}

impl Display for ViewKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = MountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim().to_ascii_lowercase();
        VIEW_KINDS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
            .ok_or(MountError::UnknownType(name))
    }
}

pub type MountResult<T> = Result<T, MountError>;

#[derive(Debug)]
pub enum MountError {
    /// Block is not a YAML mapping.
    InvalidBlock(serde_yaml::Error),
    /// Block has no `type` key.
    MissingType,
    UnknownType(String),
}

impl Display for MountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBlock(err) => write!(f, "invalid view block: {err}"),
            Self::MissingType => write!(f, "view block does not specify a view type"),
            Self::UnknownType(name) => write!(
                f,
                "unknown view type `{name}`; expected daily|weekly|year"
            ),
        }
    }
}

impl Error for MountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBlock(err) => Some(err),
            Self::MissingType | Self::UnknownType(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for MountError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::InvalidBlock(value)
    }
}

#[derive(Debug, Deserialize)]
struct RawMountBlock {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Parsed view block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountBlock {
    pub kind: ViewKind,
}

impl MountBlock {
    /// Parses the YAML body of a view block.
    ///
    /// # Errors
    /// - `InvalidBlock` when the body is not a YAML mapping.
    /// - `MissingType` when `type` is absent or blank.
    /// - `UnknownType` when `type` names no view.
    pub fn parse(source: &str) -> MountResult<Self> {
        let source = block_body(source);
        if source.trim().is_empty() {
            return Err(MountError::MissingType);
        }
        let raw: RawMountBlock = serde_yaml::from_str(source).map_err(|err| {
            warn!(
                "event=view_block_parse module=mount status=error error={}",
                err
            );
            MountError::from(err)
        })?;
        let name = raw
            .kind
            .filter(|name| !name.trim().is_empty())
            .ok_or(MountError::MissingType)?;
        Ok(Self {
            kind: name.parse()?,
        })
    }
}

/// Inner text of a code block fenced with the `calnote` language, or
/// `source` as given when it is not fenced that way.
pub fn block_body(source: &str) -> &str {
    let Some(rest) = source.trim().strip_prefix("```") else {
        return source;
    };
    let (info, body) = rest.split_once('\n').unwrap_or((rest, ""));
    if info.trim() != VIEW_BLOCK_LANGUAGE {
        return source;
    }
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim_end()
}

/// A mounted view of any kind.
#[derive(Debug)]
pub enum View {
    Daily(DailyView),
    Weekly(WeeklyView),
    Year(YearView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    Daily(DailyModel),
    Weekly(WeeklyModel),
    Year(YearModel),
}

impl View {
    pub fn mount(kind: ViewKind, ctx: Arc<ViewContext>) -> Self {
        match kind {
            ViewKind::Daily => Self::Daily(DailyView::new(ctx)),
            ViewKind::Weekly => Self::Weekly(WeeklyView::new(ctx)),
            ViewKind::Year => Self::Year(YearView::new(ctx)),
        }
    }

    /// Parses `source` and mounts the view it names.
    pub fn mount_block(source: &str, ctx: Arc<ViewContext>) -> MountResult<Self> {
        let block = MountBlock::parse(source)?;
        Ok(Self::mount(block.kind, ctx))
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Daily(_) => ViewKind::Daily,
            Self::Weekly(_) => ViewKind::Weekly,
            Self::Year(_) => ViewKind::Year,
        }
    }

    pub fn id(&self) -> ViewId {
        match self {
            Self::Daily(view) => view.id(),
            Self::Weekly(view) => view.id(),
            Self::Year(view) => view.id(),
        }
    }

    /// Loads the current coordinate, where the view reads notes, and renders.
    pub async fn refresh(&mut self, store: &dyn NoteStore) -> ViewModel {
        match self {
            Self::Daily(view) => ViewModel::Daily(view.refresh(store).await),
            Self::Weekly(view) => ViewModel::Weekly(view.refresh(store).await),
            Self::Year(view) => ViewModel::Year(view.model()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{block_body, MountBlock, MountError, ViewKind};

    #[test]
    fn view_kind_round_trips_through_table() {
        for kind in ViewKind::all() {
            assert_eq!(kind.as_str().parse::<ViewKind>().unwrap(), kind);
        }
        assert_eq!(" Weekly ".parse::<ViewKind>().unwrap(), ViewKind::Weekly);
    }

    #[test]
    fn parse_reports_each_failure() {
        assert!(matches!(MountBlock::parse(""), Err(MountError::MissingType)));
        assert!(matches!(
            MountBlock::parse("title: x"),
            Err(MountError::MissingType)
        ));
        assert!(matches!(
            MountBlock::parse("type: month"),
            Err(MountError::UnknownType(name)) if name == "month"
        ));
        assert!(matches!(
            MountBlock::parse("type: [daily"),
            Err(MountError::InvalidBlock(_))
        ));
        assert_eq!(MountBlock::parse("type: year").unwrap().kind, ViewKind::Year);
    }

    #[test]
    fn fenced_block_is_unwrapped_by_language() {
        assert_eq!(block_body("```calnote\ntype: daily\n```\n"), "type: daily");
        assert_eq!(block_body("type: daily"), "type: daily");
        assert_eq!(block_body("```yaml\ntype: daily\n```"), "```yaml\ntype: daily\n```");
        assert_eq!(
            MountBlock::parse("```calnote\ntype: weekly\n```").unwrap().kind,
            ViewKind::Weekly
        );
        assert!(matches!(
            MountBlock::parse("```calnote\n```"),
            Err(MountError::MissingType)
        ));
    }
}
