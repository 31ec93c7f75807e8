/// Pointer-driven chart event surfaced through an opaque callback.
///
/// The engine tracks which row the pointer is over and emits enter/leave
/// transitions; hosts wire these to whatever event system they use.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    GroupEnter { group_id: String },
    GroupLeave { group_id: String },
    Click { group_id: String, time: f64 },
}

pub type EventHandler = Box<dyn FnMut(ChartEvent)>;
