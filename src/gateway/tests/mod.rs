//! Unit tests for the socket gateway.
