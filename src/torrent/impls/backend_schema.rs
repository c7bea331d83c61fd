use std::collections::HashSet;
use std::hash::Hash;
use crate::torrent::errors::ClientError;
use crate::torrent::structs::backend_schema::BackendSchema;

fn check_table<T: Copy + Eq + Hash + std::fmt::Debug>(
    table_name: &str,
    table: &[(&str, T)],
) -> Result<(), ClientError> {
    let mut natives = HashSet::new();
    let mut canonicals = HashSet::new();
    for (native, canonical) in table {
        if !natives.insert(*native) {
            return Err(ClientError::SchemaError(format!("{}: native key {} mapped twice", table_name, native)));
        }
        if !canonicals.insert(*canonical) {
            return Err(ClientError::SchemaError(format!("{}: canonical field {:?} targeted twice", table_name, canonical)));
        }
    }
    Ok(())
}

impl BackendSchema {
    /// Rejects tables that map a native key twice or target a canonical field twice.
    pub fn validate(&self) -> Result<(), ClientError> {
        check_table(&format!("{} torrent", self.backend), self.torrent)?;
        check_table(&format!("{} file", self.backend), self.file)?;
        check_table(&format!("{} tracker", self.backend), self.tracker)?;
        Ok(())
    }

    /// Native keys to request from the daemon.
    pub fn request_fields(&self, full: bool) -> Vec<String> {
        let mut fields: Vec<String> = self.torrent.iter().map(|(native, _)| native.to_string()).collect();
        fields.extend(self.derived_inputs.iter().map(|f| f.to_string()));
        if full {
            fields.extend(self.detail_fields.iter().map(|f| f.to_string()));
        }
        fields
    }
}
