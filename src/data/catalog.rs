use crate::config::DataConfig;
use crate::data::errors::DataError;
use crate::data::loader::{
    load_hideout_modules_from_json, load_items_from_json, load_projects_from_json,
    load_quests_from_json,
};
use crate::data::types::{HideoutModule, Item, Project, Quest};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Read-only, in-memory view of all four game data collections.
///
/// Records keep their document order. The id indexes point at the first record
/// carrying a given id; later duplicates and records without an id stay in the
/// collection but are not reachable by id. References between records (quest
/// rewards, phase costs) are not checked.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    quests: Vec<Quest>,
    projects: Vec<Project>,
    hideout_modules: Vec<HideoutModule>,
    item_index: HashMap<String, usize>,
    quest_index: HashMap<String, usize>,
    project_index: HashMap<String, usize>,
    hideout_index: HashMap<String, usize>,
}

fn build_index<'a>(
    kind: &str,
    ids: impl Iterator<Item = Option<&'a str>>,
) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (pos, id) in ids.enumerate() {
        let Some(id) = id else {
            debug!("{} at position {} has no id; not indexed", kind, pos);
            continue;
        };
        if index.contains_key(id) {
            warn!("duplicate {} id '{}' at position {}; keeping first", kind, id, pos);
            continue;
        }
        index.insert(id.to_string(), pos);
    }
    index
}

impl Catalog {
    pub fn new(
        items: Vec<Item>,
        quests: Vec<Quest>,
        projects: Vec<Project>,
        hideout_modules: Vec<HideoutModule>,
    ) -> Self {
        let item_index = build_index("item", items.iter().map(|r| r.id.as_deref()));
        let quest_index = build_index("quest", quests.iter().map(|r| r.id.as_deref()));
        let project_index = build_index("project", projects.iter().map(|r| r.id.as_deref()));
        let hideout_index =
            build_index("hideout module", hideout_modules.iter().map(|r| r.id.as_deref()));
        Self {
            items,
            quests,
            projects,
            hideout_modules,
            item_index,
            quest_index,
            project_index,
            hideout_index,
        }
    }

    /// Load every collection named in `config` from its data root.
    /// Any unreadable or malformed document fails the whole load.
    pub fn load(config: &DataConfig) -> Result<Self, DataError> {
        let root = Path::new(&config.data_root);
        let items = load_items_from_json(root.join(&config.items_file))?;
        let quests = load_quests_from_json(root.join(&config.quests_file))?;
        let projects = load_projects_from_json(root.join(&config.projects_file))?;
        let hideout_modules = load_hideout_modules_from_json(root.join(&config.hideout_file))?;
        info!(
            "Loaded catalog from {}: {} items, {} quests, {} projects, {} hideout modules",
            root.display(),
            items.len(),
            quests.len(),
            projects.len(),
            hideout_modules.len()
        );
        Ok(Self::new(items, quests, projects, hideout_modules))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn hideout_modules(&self) -> &[HideoutModule] {
        &self.hideout_modules
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }

    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quest_index.get(id).map(|&i| &self.quests[i])
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.project_index.get(id).map(|&i| &self.projects[i])
    }

    pub fn hideout_module(&self, id: &str) -> Option<&HideoutModule> {
        self.hideout_index.get(id).map(|&i| &self.hideout_modules[i])
    }

    /// Quests listing `id` as a predecessor.
    pub fn quests_unlocked_by(&self, id: &str) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|q| {
                q.previous_quest_ids
                    .as_ref()
                    .is_some_and(|prev| prev.iter().any(|p| p == id))
            })
            .collect()
    }
}
