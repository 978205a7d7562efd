#[cfg(test)]
mod common;



#[cfg(test)]
mod approve_service_tests;

#[cfg(test)]
mod status_update_tests;

#[cfg(test)]
mod request_update_tests;

#[cfg(test)]
mod admin_session_tests;

#[cfg(test)]
mod session_gate_tests;

#[cfg(test)]
mod health_tests;
