//! Unit tests for the clipboard domain models.


mod data_url_tests;
