use serde::{Deserialize, Serialize};

/// The twelve file/folder change categories the bridge knows how to route.
///
/// Each kind maps 1:1 to a callback method name on the service and to the
/// name of the dispatch entry point that carries it (used for logging and
/// error context).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    FileCreate,
    FileCreateOnSpecificFolder,
    FileDelete,
    FileDeleteOnSpecificFolder,
    FileUpdate,
    FileUpdateOnSpecificFolder,
    FolderCreate,
    FolderCreateOnSpecificFolder,
    FolderDelete,
    FolderDeleteOnSpecificFolder,
    FolderUpdate,
    FolderUpdateOnSpecificFolder,
}

impl EventKind {
    pub const ALL: [EventKind; 12] = [
        EventKind::FileCreate,
        EventKind::FileCreateOnSpecificFolder,
        EventKind::FileDelete,
        EventKind::FileDeleteOnSpecificFolder,
        EventKind::FileUpdate,
        EventKind::FileUpdateOnSpecificFolder,
        EventKind::FolderCreate,
        EventKind::FolderCreateOnSpecificFolder,
        EventKind::FolderDelete,
        EventKind::FolderDeleteOnSpecificFolder,
        EventKind::FolderUpdate,
        EventKind::FolderUpdateOnSpecificFolder,
    ];

    /// Name of the callback method the service must declare for this kind.
    pub fn method_name(self) -> &'static str {
        match self {
            EventKind::FileCreate => "on_file_create",
            EventKind::FileCreateOnSpecificFolder => "on_file_create_on_specific_folder",
            EventKind::FileDelete => "on_file_delete",
            EventKind::FileDeleteOnSpecificFolder => "on_file_delete_on_specific_folder",
            EventKind::FileUpdate => "on_file_update",
            EventKind::FileUpdateOnSpecificFolder => "on_file_update_on_specific_folder",
            EventKind::FolderCreate => "on_folder_create",
            EventKind::FolderCreateOnSpecificFolder => "on_folder_create_on_specific_folder",
            EventKind::FolderDelete => "on_folder_delete",
            EventKind::FolderDeleteOnSpecificFolder => "on_folder_delete_on_specific_folder",
            EventKind::FolderUpdate => "on_folder_update",
            EventKind::FolderUpdateOnSpecificFolder => "on_folder_update_on_specific_folder",
        }
    }

    /// Name of the dispatch entry point for this kind, recorded in logs so a
    /// completion can be traced back to the call that registered it.
    pub fn parent_call(self) -> &'static str {
        match self {
            EventKind::FileCreate => "call_on_file_create",
            EventKind::FileCreateOnSpecificFolder => "call_on_file_create_on_specific_folder",
            EventKind::FileDelete => "call_on_file_delete",
            EventKind::FileDeleteOnSpecificFolder => "call_on_file_delete_on_specific_folder",
            EventKind::FileUpdate => "call_on_file_update",
            EventKind::FileUpdateOnSpecificFolder => "call_on_file_update_on_specific_folder",
            EventKind::FolderCreate => "call_on_folder_create",
            EventKind::FolderCreateOnSpecificFolder => "call_on_folder_create_on_specific_folder",
            EventKind::FolderDelete => "call_on_folder_delete",
            EventKind::FolderDeleteOnSpecificFolder => "call_on_folder_delete_on_specific_folder",
            EventKind::FolderUpdate => "call_on_folder_update",
            EventKind::FolderUpdateOnSpecificFolder => "call_on_folder_update_on_specific_folder",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_covers_twelve_distinct_kinds() {
        let methods: HashSet<&str> = EventKind::ALL.iter().map(|k| k.method_name()).collect();
        assert_eq!(methods.len(), 12);

        let calls: HashSet<&str> = EventKind::ALL.iter().map(|k| k.parent_call()).collect();
        assert_eq!(calls.len(), 12);
    }

    #[test]
    fn test_method_names_match_parent_calls() {
        // call_on_file_create carries on_file_create, and so on for the rest
        for kind in EventKind::ALL {
            assert_eq!(kind.parent_call(), format!("call_{}", kind.method_name()));
        }
    }

    #[test]
    fn test_specific_folder_variants_exist_for_every_base_kind() {
        let specific: Vec<&str> = EventKind::ALL
            .iter()
            .map(|k| k.method_name())
            .filter(|m| m.ends_with("_on_specific_folder"))
            .collect();
        assert_eq!(specific.len(), 6);
    }
}
