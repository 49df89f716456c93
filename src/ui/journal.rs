use super::{NavItem, render_layout, render_toast};
use crate::journal::{Energy, EntryDraft, FilteredEntries, JournalEntry, Mood};
use chrono::NaiveDate;
use maud::{Markup, html};

/// Everything the journal page shows for one request.
pub struct JournalPage<'a> {
    pub entries: FilteredEntries<'a>,
    pub query: &'a str,
    pub composing: bool,
    pub created: bool,
    /// Submitted values to put back into the form after a rejected save.
    pub draft: Option<&'a EntryDraft>,
    pub error: Option<String>,
    pub today: NaiveDate,
}

pub fn render_journal(page: &JournalPage<'_>, logged_in: bool) -> String {
    let body = html! {
        section.page.journal {
            div.page-header {
                div {
                    h1 { "Health Journal" }
                    p.subtitle { "Track your daily health journey and observations" }
                }
                @if !page.composing {
                    a.btn.btn-primary href="/journal?new=true" { "+ New Entry" }
                }
            }

            @if page.created {
                (render_toast("Journal Entry Added", "Your health journal entry has been saved."))
            }

            @if page.composing {
                (entry_form(page))
            }

            form.search method="get" action="/journal" role="search" {
                input id="search" type="search" name="q" value=(page.query)
                    placeholder="Search journal entries..." autocomplete="off";
            }

            div.tabs role="tablist" {
                button.tab.active type="button" data-view="list" { "List View" }
                button.tab type="button" data-view="calendar" { "Calendar View" }
            }

            div id="view-list" {
                div.entries id="entries" { (cards(&page.entries)) }
            }
            div.card.placeholder id="view-calendar" hidden {
                h3 { "Calendar View Coming Soon" }
                p.hint { "A calendar of your entries is on the way." }
            }
        }
    };
    render_layout("Journal", Some(NavItem::Journal), logged_in, body, JOURNAL_JS)
}

/// The entry list alone, swapped into the page as the search box changes.
pub fn render_journal_cards(entries: &FilteredEntries<'_>) -> String {
    cards(entries).into_string()
}

fn entry_form(page: &JournalPage<'_>) -> Markup {
    let draft = page.draft;
    let date = draft.and_then(|d| d.date).unwrap_or(page.today);
    let mood = draft.and_then(|d| d.mood).unwrap_or(Mood::Happy);
    let energy = draft.and_then(|d| d.energy).unwrap_or(Energy::High);
    let title = draft.map_or("", |d| d.title.as_str());
    let content = draft.map_or("", |d| d.content.as_str());
    let tags = draft.map_or("", |d| d.tags_input.as_str());

    html! {
        div.card.new-entry {
            h2 { "New Journal Entry" }
            @if let Some(error) = &page.error {
                div.error role="alert" { (error) }
            }
            form.stack method="post" action="/journal" {
                div.grid {
                    div.field {
                        label for="entry-date" { "Date" }
                        input id="entry-date" name="date" type="date" value=(date.to_string());
                    }
                    div.field {
                        label for="mood" { "Mood" }
                        select id="mood" name="mood" {
                            @for choice in Mood::ALL {
                                option value=(choice.as_str()) selected[choice == mood] {
                                    (choice.label()) " " (choice.emoji())
                                }
                            }
                        }
                    }
                    div.field {
                        label for="energy" { "Energy Level" }
                        select id="energy" name="energy" {
                            @for choice in Energy::ALL {
                                option value=(choice.as_str()) selected[choice == energy] {
                                    (choice.label())
                                }
                            }
                        }
                    }
                }
                div.field {
                    label for="title" { "Title" }
                    input id="title" name="title" value=(title) required
                        placeholder="Enter a title for your journal entry";
                }
                div.field {
                    label for="content" { "Content" }
                    textarea id="content" name="content" required
                        placeholder="Write your health observations, feelings, and notes here..." {
                        (content)
                    }
                }
                div.field {
                    label for="tags" { "Tags (comma separated)" }
                    input id="tags" name="tags_input" value=(tags)
                        placeholder="workout, energy, diet, etc.";
                }
                div.actions {
                    a.btn.btn-ghost href="/journal" { "Cancel" }
                    button.btn.btn-primary type="submit" { "Save Entry" }
                }
            }
        }
    }
}

fn cards(entries: &FilteredEntries<'_>) -> Markup {
    html! {
        @if entries.is_empty() {
            div.card.empty {
                h3 { "No Journal Entries Found" }
                @if entries.is_unfiltered() {
                    p.hint { "Start tracking your health journey by creating your first journal entry." }
                    a.btn.btn-primary href="/journal?new=true" { "Create First Entry" }
                } @else {
                    p.hint { "No entries match your search criteria. Try adjusting your search." }
                }
            }
        } @else {
            @for entry in entries {
                (card(entry))
            }
        }
    }
}

fn card(entry: &JournalEntry) -> Markup {
    html! {
        article.card.entry data-id=(entry.id) {
            div.entry-meta {
                span.mood title=(entry.mood.label()) { (entry.mood.emoji()) }
                span class={ "dot energy-" (entry.energy.as_str()) }
                    title={ (entry.energy.label()) " energy" } {}
                span.hint { (entry.date.format("%B %-d, %Y").to_string()) }
            }
            h3 { (entry.title) }
            p { (entry.content) }
            @if !entry.tags.is_empty() {
                div.tags {
                    @for tag in &entry.tags {
                        span.tag { (tag) }
                    }
                }
            }
        }
    }
}

const JOURNAL_JS: &str = r#"
    const searchEl = document.getElementById('search');
    const entriesEl = document.getElementById('entries');
    const views = {
      list: document.getElementById('view-list'),
      calendar: document.getElementById('view-calendar')
    };
    const tabs = Array.from(document.querySelectorAll('[data-view]'));
    let latest = 0;

    searchEl.addEventListener('input', async () => {
      const query = searchEl.value;
      const ticket = ++latest;
      const res = await fetch(`/journal/cards?q=${encodeURIComponent(query)}`);
      if (!res.ok || ticket !== latest) {
        return;
      }
      entriesEl.innerHTML = await res.text();
      const url = query ? `/journal?q=${encodeURIComponent(query)}` : '/journal';
      window.history.replaceState(null, '', url);
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        const view = button.dataset.view;
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        Object.entries(views).forEach(([name, el]) => {
          el.hidden = name !== view;
        });
      });
    });
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::JournalStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn cards_render_every_match_in_order() {
        let store = JournalStore::with_samples();
        let html = render_journal_cards(&store.filter("diet"));
        let routine = html.find("Back to normal routine").unwrap();
        let nutrition = html.find("Nutrition check-in").unwrap();
        assert!(routine < nutrition);
        assert!(!html.contains("Rest day"));
        assert!(html.contains("May 16, 2023"));
        assert!(html.contains("energy-medium"));
    }

    #[test]
    fn empty_state_depends_on_query() {
        let store = JournalStore::new();
        let html = render_journal_cards(&store.filter(""));
        assert!(html.contains("Create First Entry"));

        let store = JournalStore::with_samples();
        let html = render_journal_cards(&store.filter("zzz-no-such-text"));
        assert!(html.contains("No Journal Entries Found"));
        assert!(html.contains("No entries match your search criteria"));
        assert!(!html.contains("Create First Entry"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut store = JournalStore::new();
        store
            .create_entry_at(
                EntryDraft {
                    title: "<b>bold</b>".to_string(),
                    content: "a & b".to_string(),
                    tags_input: "<i>".to_string(),
                    ..EntryDraft::default()
                },
                today(),
            )
            .unwrap();
        let html = render_journal_cards(&store.filter(""));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<i>"));
    }

    #[test]
    fn rejected_draft_is_put_back_into_the_form() {
        let store = JournalStore::with_samples();
        let draft = EntryDraft {
            mood: Some(Mood::Sad),
            title: "Kept title".to_string(),
            tags_input: "sleep, rest".to_string(),
            ..EntryDraft::default()
        };
        let page = JournalPage {
            entries: store.filter(""),
            query: "",
            composing: true,
            created: false,
            draft: Some(&draft),
            error: Some("invalid entry: content must not be empty".to_string()),
            today: today(),
        };
        let html = render_journal(&page, false);
        assert!(html.contains(r#"value="Kept title""#));
        assert!(html.contains(r#"value="sleep, rest""#));
        assert!(html.contains("content must not be empty"));
        assert!(html.contains(r#"value="2026-03-01""#));
    }

    #[test]
    fn form_hidden_unless_composing() {
        let store = JournalStore::with_samples();
        let page = JournalPage {
            entries: store.filter("workout"),
            query: "workout",
            composing: false,
            created: true,
            draft: None,
            error: None,
            today: today(),
        };
        let html = render_journal(&page, true);
        assert!(!html.contains("New Journal Entry"));
        assert!(html.contains("Journal Entry Added"));
        assert!(html.contains(r#"value="workout""#));
        assert!(html.contains("Great workout session"));
    }
}
