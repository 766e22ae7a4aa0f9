
#[cfg(test)]
mod role_resolution_tests;

#[cfg(test)]
mod authority_match_tests;

#[cfg(test)]
mod guard_decision_tests;

#[cfg(test)]
mod portal_config_tests;

#[cfg(test)]
mod session_flow_tests;
