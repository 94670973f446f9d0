//! UI module tests
//!
//! GTK widgets need a display server, so these cover the toolkit-free
//! half of the UI: the Controller, its display state machine and the
//! topic-to-button binding check.
