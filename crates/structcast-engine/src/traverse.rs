use crate::filter::FieldFilter;
use structcast_types::{Entry, Record, Value};

/// Walk a record tree and collect entries in pre-order, depth-first emission
/// order. `max_depth` is the sole recursion bound and doubles as cycle
/// protection for self-referential inputs.
pub(crate) fn collect(record: &Record, max_depth: usize, filter: &FieldFilter) -> Vec<Entry> {
    let mut entries = Vec::new();
    walk_record(record, 1, max_depth, filter, &mut entries);
    entries
}

/// Recursive step. `depth` is the 1-based nesting level of `record`; entries
/// emitted here carry indent depth `depth - 1`. Node-level faults (an absent
/// optional, a non-record list element past the first) are dropped with a
/// trace line and never propagate, so one malformed subtree cannot abort the
/// whole report.
fn walk_record(
    record: &Record,
    depth: usize,
    max_depth: usize,
    filter: &FieldFilter,
    out: &mut Vec<Entry>,
) {
    let indent = depth - 1;
    for field in &record.fields {
        if filter.matches(&field.name) {
            continue;
        }
        let value = match field.value.deref_once() {
            Some(value) => value,
            None => {
                tracing::debug!(field = %field.name, "dropping field with absent optional");
                continue;
            }
        };
        match value {
            Value::Record(nested) if depth < max_depth => {
                out.push(Entry::header(&field.name, indent));
                walk_record(nested, depth + 1, max_depth, filter, out);
            }
            Value::List(items) if depth < max_depth && leads_with_record(items) => {
                out.push(Entry::group(&field.name, indent));
                for (i, item) in items.iter().enumerate() {
                    out.push(Entry::header(format!("{}[{}]", field.name, i), indent + 1));
                    match item.as_record() {
                        // Only the first element was kind-checked; later
                        // elements may still turn out not to be records.
                        Some(element) => {
                            walk_record(element, depth + 2, max_depth, filter, out);
                        }
                        None => {
                            tracing::debug!(
                                field = %field.name,
                                index = i,
                                "dropping non-record list element"
                            );
                        }
                    }
                }
            }
            other => out.push(Entry::leaf(&field.name, other.to_string(), indent)),
        }
    }
}

/// Membership test for "homogeneous list of records": the first element alone
/// decides, after stripping one optional level.
fn leads_with_record(items: &[Value]) -> bool {
    items.first().is_some_and(|item| item.as_record().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use structcast_types::Value;

    fn no_filter() -> FieldFilter {
        FieldFilter::compile(&[]).unwrap()
    }

    fn address() -> Record {
        Record::new("Address")
            .field("city", "Berlin")
            .field("zip", 10115)
    }

    fn user() -> Record {
        Record::new("User")
            .field("name", "alice")
            .field("age", 30)
            .field("address", address())
    }

    #[test]
    fn flat_record_yields_one_leaf_per_field_in_order() {
        let record = Record::new("Point")
            .field("x", 1)
            .field("y", 2)
            .field("label", "origin");
        let entries = collect(&record, 3, &no_filter());

        assert_eq!(
            entries,
            vec![
                Entry::leaf("x", "1", 0),
                Entry::leaf("y", "2", 0),
                Entry::leaf("label", "origin", 0),
            ]
        );
    }

    #[test]
    fn nested_record_emits_header_then_child_fields() {
        let entries = collect(&user(), 3, &no_filter());

        assert_eq!(
            entries,
            vec![
                Entry::leaf("name", "alice", 0),
                Entry::leaf("age", "30", 0),
                Entry::header("address", 0),
                Entry::leaf("city", "Berlin", 1),
                Entry::leaf("zip", "10115", 1),
            ]
        );
    }

    #[test]
    fn record_list_expands_with_group_and_index_headers() {
        let record = Record::new("Team").field("members", vec![address(), address()]);
        let entries = collect(&record, 3, &no_filter());

        // 1 group header + per element: 1 index header + 2 leaf entries.
        assert_eq!(entries.len(), 1 + 2 * (1 + 2));
        assert_eq!(entries[0], Entry::group("members", 0));
        assert_eq!(entries[1], Entry::header("members[0]", 1));
        assert_eq!(entries[2], Entry::leaf("city", "Berlin", 2));
        assert_eq!(entries[3], Entry::leaf("zip", "10115", 2));
        assert_eq!(entries[4], Entry::header("members[1]", 1));
        assert_eq!(entries[5], Entry::leaf("city", "Berlin", 2));
        assert_eq!(entries[6], Entry::leaf("zip", "10115", 2));
    }

    #[test]
    fn max_depth_one_stringifies_everything_structural() {
        let entries = collect(&user(), 1, &no_filter());

        assert_eq!(
            entries,
            vec![
                Entry::leaf("name", "alice", 0),
                Entry::leaf("age", "30", 0),
                Entry::leaf("address", "Address { city: Berlin, zip: 10115 }", 0),
            ]
        );
    }

    #[test]
    fn depth_ceiling_applies_to_lists_too() {
        let record = Record::new("Team").field("members", vec![address()]);
        let entries = collect(&record, 1, &no_filter());

        assert_eq!(
            entries,
            vec![Entry::leaf(
                "members",
                "[Address { city: Berlin, zip: 10115 }]",
                0
            )]
        );
    }

    #[test]
    fn excluded_fields_produce_no_entries_at_any_depth() {
        let filter = FieldFilter::compile(&["XXX_.*".to_string()]).unwrap();
        let record = Record::new("Payload")
            .field("id", 7)
            .field("XXX_unrecognized", "noise")
            .field(
                "inner",
                Record::new("Inner")
                    .field("XXX_sizecache", 0)
                    .field("kept", true),
            );
        let entries = collect(&record, 3, &filter);

        assert_eq!(
            entries,
            vec![
                Entry::leaf("id", "7", 0),
                Entry::header("inner", 0),
                Entry::leaf("kept", "true", 1),
            ]
        );
    }

    #[test]
    fn optional_wrapped_record_field_is_expanded() {
        let record = Record::new("User").field("address", Some(address()));
        let entries = collect(&record, 3, &no_filter());

        assert_eq!(entries[0], Entry::header("address", 0));
        assert_eq!(entries[1], Entry::leaf("city", "Berlin", 1));
    }

    #[test]
    fn absent_optional_field_is_dropped_and_siblings_continue() {
        let record = Record::new("User")
            .field("before", 1)
            .field("address", Value::Optional(None))
            .field("after", 2);
        let entries = collect(&record, 3, &no_filter());

        assert_eq!(
            entries,
            vec![Entry::leaf("before", "1", 0), Entry::leaf("after", "2", 0)]
        );
    }

    #[test]
    fn empty_and_scalar_lists_stay_leaf_entries() {
        let record = Record::new("Bag")
            .field("empty", Vec::<i32>::new())
            .field("tags", vec!["a", "b"]);
        let entries = collect(&record, 3, &no_filter());

        assert_eq!(
            entries,
            vec![
                Entry::leaf("empty", "[]", 0),
                Entry::leaf("tags", "[a, b]", 0),
            ]
        );
    }

    #[test]
    fn mixed_list_drops_non_record_element_bodies() {
        let record = Record::new("Mixed").field(
            "items",
            Value::List(vec![Value::from(address()), Value::from(5)]),
        );
        let entries = collect(&record, 3, &no_filter());

        assert_eq!(entries[0], Entry::group("items", 0));
        assert_eq!(entries[1], Entry::header("items[0]", 1));
        assert_eq!(entries[2], Entry::leaf("city", "Berlin", 2));
        assert_eq!(entries[3], Entry::leaf("zip", "10115", 2));
        // Index header for the faulty element stays, its body is dropped.
        assert_eq!(entries[4], Entry::header("items[1]", 1));
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn deep_nesting_stops_at_the_ceiling() {
        let record = Record::new("L1").field(
            "a",
            Record::new("L2").field("b", Record::new("L3").field("c", 1)),
        );
        let entries = collect(&record, 2, &no_filter());

        assert_eq!(
            entries,
            vec![
                Entry::header("a", 0),
                Entry::leaf("b", "L3 { c: 1 }", 1),
            ]
        );
    }
}
