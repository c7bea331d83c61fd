use crate::torrent::structs::backend_schema::BackendSchema;

#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    pub(crate) schema: &'static BackendSchema,
}
