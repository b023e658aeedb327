//! Test-only dump methods for template inspection.
