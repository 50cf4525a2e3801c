use crate::api::HttpBackend;
use crate::history::{HistoryState, fetch_history};
use crate::transaction::TransactionRecord;
use dioxus::prelude::*;

#[component]
pub fn TransactionsHistory(id: String) -> Element {
    let backend = use_context::<HttpBackend>();
    let mut history = use_signal(HistoryState::default);

    use_effect(use_reactive((&id,), move |(id,)| {
        let Some(ticket) = history.write().request(&id) else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = fetch_history(&backend, &ticket).await;
            history.write().resolve(&ticket, result);
        });
    }));

    let records = history.read().records().to_vec();

    rsx! {
        div {
            h2 { "Transactions History" }
            TransactionList { records }
        }
    }
}

/// One `li` per record, text as received
#[component]
fn TransactionList(records: Vec<TransactionRecord>) -> Element {
    rsx! {
        ul {
            for (index , record) in records.iter().enumerate() {
                li { key: "{index}-{record.id}", "{record.line()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::parse_records;
    use serde_json::json;

    fn render(records: Vec<TransactionRecord>) -> String {
        let mut dom = VirtualDom::new_with_props(TransactionList, TransactionListProps { records });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_one_item_per_record() {
        let records = parse_records(json!([
            {"id": 1, "date": "2024-05-01", "amount": 50, "description": "rent"},
            {"id": 2, "date": "2024-05-02", "amount": "-3.20", "description": "coffee"},
            {"id": 3, "date": "2024-05-03", "amount": 12, "description": "refund"},
        ]))
        .unwrap();

        let html = render(records);

        assert_eq!(html.matches("<li").count(), 3);
        assert!(html.contains("2024-05-01: 50 - rent"));
        assert!(html.contains("2024-05-02: -3.20 - coffee"));
        assert!(html.contains("2024-05-03: 12 - refund"));
    }

    #[test]
    fn test_empty_list() {
        let html = render(Vec::new());
        assert_eq!(html.matches("<li").count(), 0);
        assert!(html.contains("<ul"));
    }
}
