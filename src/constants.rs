// Browser-side names used by the web front-end.

// Window-level pointer events
pub const POINTER_MOVE: &str = "pointermove";
pub const POINTER_DOWN: &str = "pointerdown";
pub const POINTER_UP: &str = "pointerup";
pub const POINTER_CANCEL: &str = "pointercancel";

// Element that receives the grab cursor when no canvas id is supplied
pub const DEFAULT_CANVAS_ID: &str = "app-canvas";

// Cursor affordance
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

// JS camera object members (three.js naming)
pub const JS_POSITION: &str = "position";
pub const JS_SET: &str = "set";
pub const JS_LOOK_AT: &str = "lookAt";
pub const JS_UPDATE_MATRIX_WORLD: &str = "updateMatrixWorld";
