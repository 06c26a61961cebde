//! Key-set filtering: keys not in a list, pick, blacklist.

use crate::Record;

/// Own keys of `record`, in record order, that are not listed in `excluded`.
pub fn keys_not_in<K: AsRef<str>>(record: &Record, excluded: &[K]) -> Vec<String> {
    record
        .keys()
        .filter(|key| !excluded.iter().any(|e| e.as_ref() == key.as_str()))
        .cloned()
        .collect()
}

/// New record holding only the requested keys that exist in `record`.
///
/// Keys follow the order of `keys`; keys missing from `record` are skipped.
pub fn pick<K: AsRef<str>>(record: &Record, keys: &[K]) -> Record {
    let mut out = Record::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = record.get(key) {
            out.insert(key.to_string(), value.clone());
        }
    }
    out
}

/// New record holding every key of `record` except those listed in `keys`.
pub fn blacklist<K: AsRef<str>>(record: &Record, keys: &[K]) -> Record {
    pick(record, &keys_not_in(record, keys))
}
