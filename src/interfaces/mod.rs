use crate::didutil::{Namespace, helper_types::MetadataRecord};

/// Reference data lookup consumed by
/// [`MetadataAssembler`](crate::MetadataAssembler).
///
/// Implementations must serve `get` concurrently to any number of readers
/// without blocking on a refresh, and a refresh must be atomic from the
/// reader's point of view.
pub trait MetadataProvider {
    /// Looks `key` up in `namespace`. `None` means the key is unknown.
    fn get(&self, namespace: Namespace, key: &str) -> Option<MetadataRecord>;
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn get(&self, namespace: Namespace, key: &str) -> Option<MetadataRecord> {
        (**self).get(namespace, key)
    }
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for std::sync::Arc<P> {
    fn get(&self, namespace: Namespace, key: &str) -> Option<MetadataRecord> {
        (**self).get(namespace, key)
    }
}
