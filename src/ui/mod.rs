//! Server-rendered pages. Each page fills the shared layout template; any
//! fragment carrying user text is built with `maud` so it is escaped.

mod dashboard;
mod journal;
mod landing;
mod profile;

pub use dashboard::render_dashboard;
pub use journal::{JournalPage, render_journal, render_journal_cards};
pub use landing::render_landing;
pub use profile::render_profile;

use maud::{Markup, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Journal,
    Profile,
}

impl NavItem {
    const ALL: [NavItem; 3] = [NavItem::Dashboard, NavItem::Journal, NavItem::Profile];

    fn path(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/dashboard",
            NavItem::Journal => "/journal",
            NavItem::Profile => "/profile",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Journal => "Journal",
            NavItem::Profile => "Profile",
        }
    }
}

pub fn render_not_found(path: &str, logged_in: bool) -> String {
    let body = html! {
        section.page.not-found {
            h1 { "404" }
            p.subtitle { "Oops! Page not found" }
            p.hint { "Nothing lives at " code { (path) } "." }
            a.btn.btn-primary href="/" { "Return to Home" }
        }
    };
    render_layout("Page not found", None, logged_in, body, "")
}

/// Fills the layout. `title` and `script` are trusted constants; `body` is
/// substituted last so its text is never rescanned for placeholders.
fn render_layout(
    title: &str,
    active: Option<NavItem>,
    logged_in: bool,
    body: Markup,
    script: &str,
) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", title)
        .replace("{{NAV}}", &render_nav(active, logged_in).into_string())
        .replace("{{SCRIPT}}", script)
        .replace("{{BODY}}", &body.into_string())
}

fn render_nav(active: Option<NavItem>, logged_in: bool) -> Markup {
    html! {
        nav.navbar {
            a.brand href="/" { "HealthTrack" }
            div.nav-links {
                @for item in NavItem::ALL {
                    a.nav-link.active[active == Some(item)] href=(item.path()) { (item.label()) }
                }
            }
            div.nav-session {
                @if logged_in {
                    span.account { "My Account" }
                    form method="post" action="/session/logout" {
                        button.btn.btn-ghost type="submit" { "Log out" }
                    }
                } @else {
                    form method="post" action="/session/login" {
                        button.btn.btn-ghost type="submit" { "Log In" }
                    }
                    form method="post" action="/session/login" {
                        button.btn.btn-primary type="submit" { "Sign Up" }
                    }
                }
            }
        }
    }
}

/// Confirmation banner shown after a successful save.
fn render_toast(title: &str, description: &str) -> Markup {
    html! {
        div.toast role="status" {
            strong { (title) }
            span { (description) }
        }
    }
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} · HealthTrack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #12151f;
      --bg-2: #1a1f2c;
      --card: rgba(34, 40, 56, 0.86);
      --ink: #f1f3f8;
      --muted: #9aa1b2;
      --accent: #33c3f0;
      --accent-2: #8b5cf6;
      --good: #10b981;
      --warn: #eab308;
      --bad: #ef4444;
      --line: rgba(255, 255, 255, 0.1);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, rgba(51, 195, 240, 0.12), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-2) 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    a {
      color: inherit;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
    }

    .navbar {
      position: sticky;
      top: 0;
      z-index: 10;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 18px;
      padding: 14px 28px;
      background: rgba(18, 21, 31, 0.85);
      backdrop-filter: blur(12px);
      border-bottom: 1px solid var(--line);
    }

    .brand {
      font-weight: 600;
      font-size: 1.3rem;
      text-decoration: none;
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      -webkit-background-clip: text;
      color: transparent;
    }

    .nav-links {
      display: flex;
      gap: 16px;
      flex: 1;
    }

    .nav-link {
      text-decoration: none;
      color: var(--muted);
    }

    .nav-link.active,
    .nav-link:hover {
      color: var(--accent);
    }

    .nav-session {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .nav-session form {
      margin: 0;
    }

    .account {
      color: var(--muted);
      font-size: 0.95rem;
    }

    main {
      width: min(1100px, 100%);
      margin: 0 auto;
      padding: 32px 18px 48px;
    }

    .page {
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    .page-header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
    }

    .page-header h1 {
      margin: 0 0 6px;
      font-size: clamp(1.8rem, 3.5vw, 2.4rem);
    }

    .subtitle,
    .hint {
      margin: 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 22px;
      box-shadow: var(--shadow);
    }

    .card h2,
    .card h3 {
      margin-top: 0;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .stat {
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    .trend-up {
      color: var(--good);
    }

    .trend-down {
      color: var(--bad);
    }

    .btn {
      appearance: none;
      border: 1px solid transparent;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      display: inline-flex;
      align-items: center;
      gap: 8px;
      transition: transform 150ms ease;
    }

    .btn:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: #0b1220;
    }

    .btn-outline {
      background: transparent;
      border-color: var(--line);
      color: var(--ink);
    }

    .btn-ghost {
      background: transparent;
      color: var(--ink);
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(255, 255, 255, 0.05);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
      text-decoration: none;
      background: transparent;
      border: none;
      cursor: pointer;
      font-family: inherit;
    }

    .tab.active {
      background: var(--accent);
      color: #0b1220;
    }

    form.stack {
      display: grid;
      gap: 18px;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.9rem;
      color: var(--muted);
    }

    input,
    select,
    textarea {
      width: 100%;
      font: inherit;
      color: var(--ink);
      background: var(--bg-2);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 10px 12px;
    }

    input:focus,
    select:focus,
    textarea:focus {
      outline: none;
      border-color: var(--accent);
    }

    textarea {
      min-height: 150px;
      resize: vertical;
    }

    .actions {
      display: flex;
      justify-content: flex-end;
      gap: 12px;
    }

    .toast {
      display: grid;
      gap: 4px;
      padding: 14px 18px;
      border-radius: 14px;
      border: 1px solid rgba(16, 185, 129, 0.4);
      background: rgba(16, 185, 129, 0.12);
    }

    .error {
      padding: 14px 18px;
      border-radius: 14px;
      border: 1px solid rgba(239, 68, 68, 0.4);
      background: rgba(239, 68, 68, 0.12);
      color: #fca5a5;
    }

    .tag {
      display: inline-block;
      padding: 4px 12px;
      border-radius: 999px;
      font-size: 0.75rem;
      background: rgba(51, 195, 240, 0.18);
      color: var(--accent);
    }

    .dot {
      display: inline-block;
      width: 8px;
      height: 8px;
      border-radius: 50%;
    }

    .energy-high {
      background: var(--good);
    }

    .energy-medium {
      background: var(--warn);
    }

    .energy-low {
      background: var(--bad);
    }

    .chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart.sparkline {
      height: 100px;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .progress {
      height: 10px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.08);
      overflow: hidden;
      margin: 12px 0;
    }

    .progress-fill {
      height: 100%;
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--bad);
    }

    .profile-header,
    .setting-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      padding: 12px 0;
      border-bottom: 1px solid var(--line);
    }

    .profile-header {
      justify-content: flex-start;
      margin-bottom: 12px;
    }

    .avatar {
      width: 72px;
      height: 72px;
      border-radius: 50%;
      border: 2px solid var(--accent);
      display: grid;
      place-items: center;
      font-size: 1.5rem;
      font-weight: 600;
    }

    .switch {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      border: 1px solid var(--line);
      border-radius: 999px;
      padding: 4px 12px 4px 4px;
      background: rgba(255, 255, 255, 0.06);
      color: var(--muted);
      font: inherit;
      cursor: pointer;
    }

    .switch .thumb {
      width: 18px;
      height: 18px;
      border-radius: 50%;
      background: var(--muted);
    }

    .switch.on {
      background: rgba(51, 195, 240, 0.2);
      color: var(--accent);
    }

    .switch.on .thumb {
      background: var(--accent);
    }

    .search input {
      padding-left: 16px;
    }

    .entries {
      display: grid;
      gap: 18px;
    }

    .entry-meta {
      display: flex;
      align-items: center;
      gap: 10px;
      margin-bottom: 6px;
    }

    .entry h3 {
      margin: 0 0 10px;
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .empty,
    .placeholder {
      text-align: center;
      display: grid;
      gap: 12px;
      justify-items: center;
      padding: 48px 22px;
    }

    .hero {
      text-align: center;
      display: grid;
      gap: 18px;
      justify-items: center;
      padding: 48px 0 24px;
    }

    .hero h1 {
      font-size: clamp(2.2rem, 5vw, 3.6rem);
      margin: 0;
      max-width: 760px;
    }

    .gradient {
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      -webkit-background-clip: text;
      color: transparent;
    }

    .hero-actions {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 12px;
    }

    .cta {
      text-align: center;
      display: grid;
      gap: 16px;
    }

    blockquote {
      margin: 0 0 16px;
      color: var(--muted);
    }

    .not-found {
      text-align: center;
      justify-items: center;
      padding-top: 80px;
    }

    .not-found h1 {
      font-size: 4rem;
      margin: 0;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .navbar {
        padding: 12px 16px;
      }
      .nav-links {
        order: 3;
        flex-basis: 100%;
      }
    }
  </style>
</head>
<body>
  {{NAV}}
  <main>
    {{BODY}}
  </main>
  <script>
{{SCRIPT}}
  </script>
</body>
</html>
"#;
