pub mod idle_click_service;
