//! Floor-plan editing core for the restaurant back office.
//!
//! This crate owns everything about a floor plan that can be decided without
//! I/O: table geometry, the pan/zoom viewport and its gestures, drag-and-drop
//! placement, hit-testing, and the floor/table mutation rules. The host
//! (the `backoffice` server, or a browser shell) feeds input events and
//! toolbar commands into [`engine::EditorCore`], persists the `Floor*`
//! [`engine::Action`]s it returns, and renders from
//! [`engine::EditorCore::table_views`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor core composing the pieces below; emits actions |
//! | [`layout`] | Floor/table model and the single mutation path |
//! | [`viewport`] | Pan/zoom controller for mouse, touch and buttons |
//! | [`placement`] | Drop target that maps drops to clamped canvas positions |
//! | [`geometry`] | Table shapes and size rules |
//! | [`camera`] | Client/canvas coordinate conversions |
//! | [`input`] | Input event types and gesture state |
//! | [`hit`] | Hit-testing against table bounds |
//! | [`guest`] | Reservation and waitlist records |
//! | [`consts`] | Canvas extent, zoom and scale limits, step sizes |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod guest;
pub mod hit;
pub mod input;
pub mod layout;
pub mod placement;
pub mod viewport;
