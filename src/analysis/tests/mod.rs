//! Tests for derived metrics and flight category classification
