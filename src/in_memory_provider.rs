// Copyright (C) 2025 The didutil Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::HashMap, sync::Arc};

use dashmap::DashMap;
use log::debug;

use crate::{
    didutil::{
        Namespace,
        helper_types::{CountryMetadata, MetadataRecord, NadpMetadata},
    },
    interfaces::MetadataProvider,
};

type Snapshot = Arc<HashMap<String, MetadataRecord>>;

/// In-memory [`MetadataProvider`].
///
/// Each namespace is an immutable snapshot behind an `Arc`. Readers clone the
/// `Arc` and never wait for writers; bulk replacements swap the whole
/// snapshot, so a reader sees either the old or the new dataset, never a mix.
pub struct InMemoryMetadataProvider {
    namespaces: DashMap<Namespace, Snapshot>,
}

impl InMemoryMetadataProvider {
    pub fn new() -> Self {
        Self {
            namespaces: DashMap::with_capacity(2),
        }
    }

    /// Replaces the whole country dataset, keyed by calling code. Returns
    /// the number of records now served.
    pub fn replace_countries<K, I>(&self, records: I) -> usize
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CountryMetadata)>,
    {
        self.replace(Namespace::Country, records)
    }

    /// Replaces the whole NADP dataset, keyed by area code. Returns the
    /// number of records now served.
    pub fn replace_nadp<K, I>(&self, records: I) -> usize
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, NadpMetadata)>,
    {
        self.replace(Namespace::Nadp, records)
    }

    fn replace<K, V, I>(&self, namespace: Namespace, records: I) -> usize
    where
        K: Into<String>,
        V: Into<MetadataRecord>,
        I: IntoIterator<Item = (K, V)>,
    {
        let table: HashMap<String, MetadataRecord> = records
            .into_iter()
            .map(|(key, record)| (key.into(), record.into()))
            .collect();
        let len = table.len();
        self.namespaces.insert(namespace, Arc::new(table));
        debug!("Replaced {} metadata with {} records", namespace, len);
        len
    }

    pub fn insert_country(&self, calling_code: impl Into<String>, country: CountryMetadata) {
        self.insert(Namespace::Country, calling_code.into(), country.into());
    }

    pub fn insert_nadp(&self, area_code: impl Into<String>, nadp: NadpMetadata) {
        self.insert(Namespace::Nadp, area_code.into(), nadp.into());
    }

    /// Copy-on-write insert. The shard lock is held while the snapshot is
    /// rebuilt, readers holding the previous snapshot keep it untouched.
    fn insert(&self, namespace: Namespace, key: String, record: MetadataRecord) {
        let mut snapshot = self.namespaces.entry(namespace).or_default();
        Arc::make_mut(&mut *snapshot).insert(key, record);
    }

    pub fn len(&self, namespace: Namespace) -> usize {
        self.snapshot(namespace).map_or(0, |snapshot| snapshot.len())
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.iter().all(|entry| entry.value().is_empty())
    }

    fn snapshot(&self, namespace: Namespace) -> Option<Snapshot> {
        self.namespaces
            .get(&namespace)
            .map(|entry| Arc::clone(entry.value()))
    }
}

impl Default for InMemoryMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataProvider for InMemoryMetadataProvider {
    fn get(&self, namespace: Namespace, key: &str) -> Option<MetadataRecord> {
        self.snapshot(namespace)?.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::InMemoryMetadataProvider;
    use crate::{
        didutil::{
            Namespace,
            helper_types::{CountryMetadata, MetadataRecord, NadpMetadata},
        },
        interfaces::MetadataProvider,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn oman() -> CountryMetadata {
        CountryMetadata {
            iso2: "OM".to_owned(),
            iso3: "OMN".to_owned(),
            name: "Oman".to_owned(),
        }
    }

    fn washington() -> NadpMetadata {
        NadpMetadata {
            country_iso: "US".to_owned(),
            country_name: "United States".to_owned(),
            state_iso: "WA".to_owned(),
            state_name: "Washington".to_owned(),
        }
    }

    #[test]
    fn namespaces_are_separate() {
        init_logger();
        let provider = InMemoryMetadataProvider::new();
        assert!(provider.is_empty());

        provider.insert_country("968", oman());
        provider.insert_nadp("206", washington());

        assert_eq!(
            provider.get(Namespace::Country, "968"),
            Some(MetadataRecord::Country(oman()))
        );
        assert_eq!(
            provider.get(Namespace::Nadp, "206"),
            Some(MetadataRecord::Nadp(washington()))
        );
        assert_eq!(provider.get(Namespace::Nadp, "968"), None);
        assert_eq!(provider.get(Namespace::Country, "206"), None);
        assert!(!provider.is_empty());
    }

    #[test]
    fn replace_swaps_the_whole_namespace() {
        init_logger();
        let provider = InMemoryMetadataProvider::new();
        provider.insert_nadp("206", washington());
        provider.insert_country("968", oman());

        let replaced = provider.replace_nadp([("425", washington()), ("253", washington())]);
        assert_eq!(replaced, 2);
        assert_eq!(provider.len(Namespace::Nadp), 2);
        assert_eq!(provider.get(Namespace::Nadp, "206"), None);
        assert!(provider.get(Namespace::Nadp, "425").is_some());
        // other namespace untouched
        assert_eq!(provider.len(Namespace::Country), 1);
    }

    #[test]
    fn readers_see_complete_snapshots() {
        init_logger();
        let provider = Arc::new(InMemoryMetadataProvider::new());
        let old: Vec<(String, NadpMetadata)> = (200..300)
            .map(|code| (code.to_string(), washington()))
            .collect();
        provider.replace_nadp(old);

        let writer = {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                for _ in 0..50 {
                    let new: Vec<(String, NadpMetadata)> = (300..400)
                        .map(|code| (code.to_string(), washington()))
                        .collect();
                    provider.replace_nadp(new);
                }
            })
        };

        for _ in 0..200 {
            let len = provider.len(Namespace::Nadp);
            assert_eq!(len, 100);
        }
        writer.join().unwrap();
        assert!(provider.get(Namespace::Nadp, "350").is_some());
        assert!(provider.get(Namespace::Nadp, "250").is_none());
    }
}
