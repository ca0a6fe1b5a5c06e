pub mod mock_gpio;
pub mod mock_pwm;
pub mod mock_services;
