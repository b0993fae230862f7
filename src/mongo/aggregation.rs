use mongodb::{
    bson::{doc, Document},
    Collection, Cursor,
};

/// Collection holding staged Mixpanel events.
pub const EVENTS_COLLECTION: &str = "mixpanel_stage";

/// One `$group` stage keyed on the event name. No `$sort` stage: group
/// order in the result is whatever the server yields.
pub fn group_by_event() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": { "event": "$event" },
            "count": { "$sum": 1 }
        }
    }]
}

/// Run the group-and-count aggregation, returning the driver cursor that
/// lazily yields one group document per distinct event value. The sequence
/// is finite and not restartable; rerun the aggregation to reproduce it.
pub async fn event_counts(
    collection: Collection<Document>,
) -> mongodb::error::Result<Cursor<Document>> {
    collection.aggregate(group_by_event(), None).await
}
