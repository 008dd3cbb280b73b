use coldleads_core::present::{company_pulse_display, compose_link, role_label};
use coldleads_core::{normalize_company_url, LeadError};

fn normalized(raw: &str) -> String {
    normalize_company_url(raw).unwrap().into_string()
}

#[test]
fn bare_hosts_get_https() {
    assert_eq!(normalized("swiggy.com"), "https://swiggy.com");
    assert_eq!(normalized("www.acme.io/about"), "https://www.acme.io/about");
    assert_eq!(normalized("  acme.io  "), "https://acme.io");
}

#[test]
fn existing_scheme_is_kept_regardless_of_case() {
    for url in [
        "http://acme.io",
        "https://acme.io",
        "HTTPS://ACME.IO",
        "Http://acme.io/path?q=1",
    ] {
        assert_eq!(normalized(url), url);
    }
}

#[test]
fn other_schemes_are_treated_as_hosts() {
    assert_eq!(normalized("ftp://acme.io"), "https://ftp://acme.io");
    assert_eq!(normalized("httpx://acme.io"), "https://httpx://acme.io");
}

#[test]
fn blank_input_is_rejected() {
    assert_eq!(normalize_company_url(""), Err(LeadError::EmptyInput));
    assert_eq!(normalize_company_url(" \t\n"), Err(LeadError::EmptyInput));
}

#[test]
fn role_labels() {
    assert_eq!(role_label(""), "—");
    assert_eq!(role_label("Jane Hiring Manager"), "The Hiring Manager");
    assert_eq!(role_label("The Hiring Manager"), "The Hiring Manager");
    assert_eq!(role_label("Jane CTO Smith"), "Jane CTO Smith");
    assert_eq!(role_label("jane (cto)"), "jane (cto)");
    assert_eq!(role_label("the CTO"), "the CTO");
    assert_eq!(role_label("Jane Smith"), "Jane Smith — CTO");
}

#[test]
fn hiring_manager_check_wins_over_cto() {
    assert_eq!(role_label("CTO / HIRING MANAGER"), "The Hiring Manager");
}

#[test]
fn empty_pulse_falls_back() {
    assert_eq!(company_pulse_display(""), "No recent news found.");
    assert_eq!(company_pulse_display("Launched v2"), "Launched v2");
}

#[test]
fn compose_link_encodes_like_uri_components() {
    let link = compose_link("Hi & bye", "Line one\nLine two: 100% (ok)!");
    assert_eq!(
        link,
        "https://mail.google.com/mail/?view=cm&fs=1&to=&su=Hi%20%26%20bye\
         &body=Line%20one%0ALine%20two%3A%20100%25%20(ok)!"
    );
}

#[test]
fn compose_link_encodes_non_ascii_as_utf8() {
    let link = compose_link("s", "Namasté — hi");
    assert!(link.ends_with("&body=Namast%C3%A9%20%E2%80%94%20hi"));
}
