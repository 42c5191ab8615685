//! Text rendering of the form, the list and the edit modal.

use contacts_core::{AppState, Contact, ContactFields, EditSession, Field};

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Phone => "Phone",
        Field::Email => "Email",
        Field::Address => "Address",
    }
}

fn form(out: &mut String, fields: &ContactFields) {
    for field in Field::ALL {
        out.push_str(&format!("  {:<8} [{}]\n", label(field), fields.get(field)));
    }
}

pub fn draft(state: &AppState) -> String {
    let mut out = String::from("Add New Contact\n");
    form(&mut out, state.draft().fields());
    out
}

fn entry(out: &mut String, contact: &Contact) {
    let f = &contact.fields;
    out.push_str(&format!("  #{} {}\n", contact.id, f.name));
    out.push_str(&format!("      Phone: {}\n", f.phone));
    out.push_str(&format!("      Email: {}\n", f.email));
    out.push_str(&format!("      Address: {}\n", f.address));
}

pub fn contacts(state: &AppState) -> String {
    let mut out = String::from("Contact List\n");
    if state.contacts().is_empty() {
        out.push_str("  (no contacts)\n");
    }
    for contact in state.contacts() {
        entry(&mut out, contact);
    }
    out
}

pub fn modal(session: &EditSession) -> String {
    let mut out = format!("Edit Contact #{}\n", session.id());
    form(&mut out, session.fields());
    out.push_str("  (save | close)\n");
    out
}

/// The whole screen. The modal appears iff an edit session is active.
pub fn screen(state: &AppState) -> String {
    let mut out = draft(state);
    out.push('\n');
    out.push_str(&contacts(state));
    if let Some(session) = state.edit_session() {
        out.push('\n');
        out.push_str(&modal(session));
    }
    out
}
