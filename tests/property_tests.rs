//! Property-based tests for the document permission codec

use docperm::*;
use proptest::prelude::*;

fn id_strategy() -> impl Strategy<Value = String> {
    r"[a-z0-9]{1,12}"
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::DocumentEdit),
        Just(Action::DocumentApprove),
        Just(Action::DocumentAdd),
        Just(Action::DocumentDelete),
        Just(Action::SpaceView),
        Just(Action::SpaceManage),
        Just(Action::CategoryView),
        Just(Action::Other("doc-edit".into())),
        Just(Action::Other("doc-approve".into())),
        r"x-[a-z]{1,8}".prop_map(Action::Other),
    ]
}

fn record_strategy() -> impl Strategy<Value = DocumentRecord> {
    (id_strategy(), id_strategy(), id_strategy(), any::<bool>(), any::<bool>()).prop_map(
        |(org, doc, user, edit, approve)| DocumentRecord {
            org_id: org,
            document_id: doc,
            user_id: user,
            document_role_edit: edit,
            document_role_approve: approve,
        },
    )
}

/// Rows for one fixed (org, document, user)
fn rows_strategy() -> impl Strategy<Value = Vec<Permission>> {
    prop::collection::vec(action_strategy(), 0..12).prop_map(|actions| {
        let base = DocumentRecord::new("o1", "d1", "u1");
        actions.into_iter().map(|a| encode_document_record(&base, a)).collect()
    })
}

/// Rows paired with an arbitrary permutation of themselves
fn permuted_rows_strategy() -> impl Strategy<Value = (Vec<Permission>, Vec<Permission>)> {
    rows_strategy().prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
}

fn flags(r: &DocumentRecord) -> (bool, bool) {
    (r.document_role_edit, r.document_role_approve)
}

proptest! {
    #[test]
    fn prop_round_trip_preserves_flags(r in record_strategy()) {
        let back = decode_document_permissions(&encode_document_permissions(&r));
        prop_assert_eq!(flags(&back), flags(&r));
        if has_any_document_permission(&r) {
            prop_assert_eq!(back, r);
        } else {
            prop_assert_eq!(back, DocumentRecord::default());
        }
    }

    #[test]
    fn prop_duplicates_do_not_change_result(rows in rows_strategy()) {
        let mut doubled = rows.clone();
        doubled.extend(rows.iter().cloned());
        prop_assert_eq!(decode_document_permissions(&doubled), decode_document_permissions(&rows));
    }

    #[test]
    fn prop_order_does_not_change_flags((rows, shuffled) in permuted_rows_strategy()) {
        prop_assert_eq!(
            flags(&decode_document_permissions(&shuffled)),
            flags(&decode_document_permissions(&rows))
        );
    }

    #[test]
    fn prop_flags_match_actions_present(rows in rows_strategy()) {
        let r = decode_document_permissions(&rows);
        let edit = rows.iter().any(|p| p.action == Action::DocumentEdit);
        let approve = rows.iter().any(|p| p.action == Action::DocumentApprove);
        prop_assert_eq!(r.document_role_edit, edit);
        prop_assert_eq!(r.document_role_approve, approve);
    }

    #[test]
    fn prop_encoded_rows_have_fixed_tags(r in record_strategy(), a in action_strategy()) {
        let mut produced = encode_document_permissions(&r);
        produced.push(encode_document_record(&r, a));
        for p in produced {
            prop_assert_eq!(p.who, Who::User);
            prop_assert_eq!(p.location, Location::Document);
            prop_assert_eq!(p.scope, Scope::Object);
            prop_assert_eq!(&p.org_id, &r.org_id);
            prop_assert_eq!(&p.who_id, &r.user_id);
            prop_assert_eq!(&p.ref_id, &r.document_id);
        }
    }

    #[test]
    fn prop_has_any_is_or_of_flags(r in record_strategy()) {
        let has_any = has_any_document_permission(&r);
        prop_assert_eq!(has_any, r.document_role_edit || r.document_role_approve);
        prop_assert_eq!(encode_document_permissions(&r).is_empty(), !has_any);
    }
}
