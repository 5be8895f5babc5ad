//! Query dispatch: strict request/response.

use local_bus::{
    BusError, HandlerError, LocalMessageBus, MessageBus, MessageType, Query, Response,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::support::{FixedQueryHandler, QueryAHandler, Recorder};

#[derive(Serialize, Deserialize)]
struct FindOrder {
    id: String,
}

impl MessageType for FindOrder {
    const NAME: &'static str = "FindOrder";
}

#[tokio::test]
async fn register_and_call_query() {
    let bus = LocalMessageBus::default();
    bus.register_query_handler("QueryA", QueryAHandler);

    let response = bus.call(Query::named("QueryA")).await.unwrap();

    assert_eq!(response.name(), "ResultA");
}

#[tokio::test]
async fn call_returns_exactly_what_the_handler_produced() {
    let bus = LocalMessageBus::default();
    let expected = Response::new("OrderView", json!({ "id": "o1", "lines": [1, 2, 3] }))
        .with_metadata("version", "3");
    let produced = expected.clone();
    bus.register_query_handler("FindOrder", move |_: Query| {
        let produced = produced.clone();
        async move { Ok::<_, HandlerError>(produced) }
    });

    let response = bus.call(Query::named("FindOrder")).await.unwrap();

    assert_eq!(response, expected);
}

#[tokio::test]
async fn typed_query_payload_reaches_handler() {
    let bus = LocalMessageBus::default();
    bus.register_query_handler(FindOrder::NAME, |query: Query| async move {
        let find: FindOrder = query.decode()?;
        Ok::<_, HandlerError>(Response::new("OrderView", json!({ "id": find.id })))
    });

    let query = Query::typed(&FindOrder { id: "o42".into() }).unwrap();
    let response = bus.call(query).await.unwrap();

    assert_eq!(response.payload(), &json!({ "id": "o42" }));
}

#[tokio::test]
async fn undecodable_payload_surfaces_as_handler_failure() {
    let bus = LocalMessageBus::default();
    bus.register_query_handler(FindOrder::NAME, |query: Query| async move {
        let find: FindOrder = query.decode()?;
        Ok::<_, HandlerError>(Response::new("OrderView", json!({ "id": find.id })))
    });

    let err = bus
        .call(Query::new("FindOrder", json!({ "unexpected": true })))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BusError::Handler { source: HandlerError::DecodeFailed(_), .. }
    ));
}

#[tokio::test]
async fn missing_handler_names_the_query() {
    let bus = LocalMessageBus::default();

    let err = bus.call(Query::named("QueryX")).await.unwrap_err();

    assert!(err.is_handler_not_found());
    assert_eq!(err.message_name(), "QueryX");
    assert_eq!(err.to_string(), "unable to find a query handler for (QueryX)");
}

#[tokio::test]
async fn re_registering_overwrites_previous_handler() {
    let bus = LocalMessageBus::default();
    bus.register_query_handler("QueryA", FixedQueryHandler("Old"))
        .register_query_handler("QueryA", FixedQueryHandler("New"));

    let response = bus.call(Query::named("QueryA")).await.unwrap();

    assert_eq!(response.name(), "New");
}

#[tokio::test]
async fn queries_and_commands_use_separate_registries() {
    let bus = LocalMessageBus::default();
    bus.register_query_handler("Shared", QueryAHandler);

    assert!(bus.has_query_handler("Shared"));
    assert!(!bus.has_command_handler("Shared"));
    let err = bus
        .execute(local_bus::Command::named("Shared"))
        .await
        .unwrap_err();
    assert!(matches!(err, BusError::CommandHandlerNotFound(_)));
}

#[tokio::test]
async fn call_publishes_nothing() {
    let bus = LocalMessageBus::default();
    let recorder = Recorder::new();
    bus.register_query_handler("QueryA", QueryAHandler)
        .on("ResultA", recorder.listener("L"));

    bus.call(Query::named("QueryA")).await.unwrap();

    assert!(recorder.calls().is_empty());
}
