//! Global CSS styles for the portfolio.
//!
//! Dark arena palette: near-black backgrounds, Swiss red accents, warm white text.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKGROUNDS */
  --ink: #0d0d0f;
  --ink-raised: #16161a;
  --ink-border: #26262c;

  /* ACCENT */
  --red: #d52b1e;
  --red-glow: rgba(213, 43, 30, 0.35);
  --gold: #c9a24a;

  /* TEXT */
  --text-primary: #f4f1ec;
  --text-secondary: rgba(244, 241, 236, 0.72);
  --text-muted: rgba(244, 241, 236, 0.5);

  /* Typography */
  --font-display: 'Bebas Neue', 'Oswald', Impact, sans-serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Layout */
  --navbar-height: 72px;
  --content-width: 1120px;
  --ease: cubic-bezier(0.22, 1, 0.36, 1);
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: auto; }

body {
  margin: 0;
  background: var(--ink);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

img { max-width: 100%; display: block; }

section {
  padding: 6rem 1.5rem;
  max-width: var(--content-width);
  margin: 0 auto;
}

.section-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, 3.5rem);
  letter-spacing: 0.04em;
  text-transform: uppercase;
  margin: 0 0 2rem;
}

.section-title::after {
  content: '';
  display: block;
  width: 64px;
  height: 4px;
  margin-top: 0.75rem;
  background: var(--red);
}

.body-text { color: var(--text-secondary); max-width: 68ch; }

.highlights {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  padding: 0;
  margin: 2rem 0 0;
  list-style: none;
}

.highlights li {
  border: 1px solid var(--ink-border);
  padding: 0.4rem 0.9rem;
  font-size: 0.85rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.85rem 1.75rem;
  font: 600 0.9rem var(--font-body);
  letter-spacing: 0.08em;
  text-transform: uppercase;
  border: 2px solid transparent;
  cursor: pointer;
  transition: background 200ms, box-shadow 200ms, transform 200ms;
}

.btn-primary { background: var(--red); color: var(--text-primary); }
.btn-primary:hover { box-shadow: 0 0 24px var(--red-glow); transform: translateY(-2px); }
.btn-outline { background: transparent; border-color: var(--text-primary); color: var(--text-primary); }
.btn-ghost { background: transparent; color: var(--text-secondary); padding-inline: 0; }
.btn-ghost:hover { color: var(--text-primary); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 44px;
  height: 44px;
  padding: 0 0.75rem;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  color: var(--text-primary);
  font-size: 1.25rem;
  cursor: pointer;
}

.icon-btn:disabled { opacity: 0.3; cursor: default; }

/* === Navbar === */
.navbar {
  position: fixed;
  inset: 0 0 auto 0;
  height: var(--navbar-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  z-index: 900;
  transition: background 300ms var(--ease), height 300ms var(--ease);
}

.navbar.scrolled {
  background: rgba(13, 13, 15, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--ink-border);
  height: 60px;
}

.logo {
  font-family: var(--font-display);
  font-size: 1.6rem;
  letter-spacing: 0.06em;
}

.logo span { color: var(--red); }

.nav-links { display: flex; gap: 2rem; }

.nav-links a {
  font-size: 0.85rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-secondary);
}

.nav-links a:hover { color: var(--text-primary); }

.menu-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  padding: 0.5rem;
  cursor: pointer;
  z-index: 1001;
}

.menu-bar {
  width: 26px;
  height: 2px;
  background: var(--text-primary);
  transition: transform 300ms var(--ease), opacity 300ms;
}

.menu-toggle.active .menu-bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.menu-toggle.active .menu-bar:nth-child(2) { opacity: 0; }
.menu-toggle.active .menu-bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

/* === Sidebar === */
.sidebar-nav {
  position: fixed;
  top: 0;
  right: 0;
  width: min(300px, 80vw);
  height: 100vh;
  background: var(--ink-raised);
  padding: 6rem 2rem 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  transform: translateX(100%);
  transition: transform 350ms var(--ease);
  z-index: 1000;
}

.sidebar-nav.active { transform: translateX(0); }

.sidebar-nav a {
  font-family: var(--font-display);
  font-size: 1.75rem;
  letter-spacing: 0.05em;
}

.sidebar-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.6);
  opacity: 0;
  pointer-events: none;
  transition: opacity 300ms;
  z-index: 950;
}

.sidebar-overlay.active { opacity: 1; pointer-events: auto; }

/* === Hero === */
.hero {
  min-height: 100vh;
  max-width: none;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: calc(var(--navbar-height) + 2rem) 2rem 4rem;
  background:
    linear-gradient(90deg, rgba(13, 13, 15, 0.95) 30%, rgba(13, 13, 15, 0.4)),
    url('images/hero.jpg') center / cover no-repeat;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(3.5rem, 10vw, 8rem);
  line-height: 0.95;
  margin: 0;
  text-transform: uppercase;
}

.hero-title .first { display: block; color: var(--text-secondary); }
.hero-title .last { display: block; color: var(--text-primary); }

.hero-tagline {
  font-size: 1.15rem;
  color: var(--text-secondary);
  max-width: 40ch;
  margin: 1.5rem 0 2.5rem;
}

.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }

/* === Timeline === */
.timeline-container {
  position: relative;
  margin-top: 3rem;
  overflow: hidden;
  border: 1px solid var(--ink-border);
  background: var(--ink-raised);
}

.timeline-svg-container { min-height: 220px; }

.timeline-svg {
  width: 100%;
  height: auto;
  transform-origin: 0 50%;
  transition: transform 600ms var(--ease);
  cursor: zoom-in;
}

.timeline-section-area { cursor: pointer; }
.timeline-section-area:hover rect { fill-opacity: 0.12; }

.timeline-container.zoomed .timeline-svg { cursor: zoom-out; }
.timeline-container.zoom-section-1 .timeline-svg { transform: scale(3) translateX(0); }
.timeline-container.zoom-section-2 .timeline-svg { transform: scale(3) translateX(-33.333%); }
.timeline-container.zoom-section-3 .timeline-svg { transform: scale(3) translateX(-66.666%); }

.timeline-controls {
  display: none;
  position: absolute;
  inset: auto 1rem 1rem auto;
  gap: 0.5rem;
}

.timeline-container.zoomed .timeline-controls { display: flex; }

.timeline-hint {
  color: var(--text-muted);
  font-size: 0.85rem;
  margin-top: 0.75rem;
}

/* === Achievements === */
.achievements-carousel {
  display: grid;
  grid-auto-flow: column;
  grid-auto-columns: minmax(260px, 1fr);
  gap: 1.5rem;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  padding-bottom: 1rem;
}

.achievement-card {
  scroll-snap-align: start;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-top: 4px solid var(--red);
  padding: 1.75rem;
  cursor: pointer;
  transition: transform 250ms var(--ease), border-color 250ms;
}

.achievement-card:hover { transform: translateY(-4px); border-color: var(--red); }

.achievement-badge { color: var(--gold); font-size: 0.8rem; letter-spacing: 0.12em; }
.achievement-card h3 { font-family: var(--font-display); font-size: 1.8rem; margin: 0.5rem 0; }
.achievement-result { color: var(--red); font-weight: 700; text-transform: uppercase; }
.achievement-location { color: var(--text-muted); font-size: 0.9rem; }

/* === Budget === */
.plan-table { width: 100%; border-collapse: collapse; max-width: 720px; }
.plan-table td { padding: 0.9rem 0; border-bottom: 1px solid var(--ink-border); }
.plan-table td:last-child { text-align: right; font-variant-numeric: tabular-nums; }
.plan-table tfoot td { font-weight: 700; color: var(--gold); border-bottom: none; }

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

.gallery-grid img { aspect-ratio: 4 / 5; object-fit: cover; width: 100%; }

/* === Partners === */
.partners-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
  margin-top: 2.5rem;
}

.partner-card {
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  padding: 1.75rem;
  cursor: pointer;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.partner-card img { max-height: 64px; width: auto; }
.partner-tier { font-size: 0.75rem; letter-spacing: 0.12em; text-transform: uppercase; color: var(--text-muted); }
.partner-tier-main .partner-tier { color: var(--red); }
.partner-tier-gold .partner-tier { color: var(--gold); }
.partner-name { font-family: var(--font-display); font-size: 1.6rem; margin: 0; }
.partner-blurb { color: var(--text-secondary); margin: 0; }

/* === Modals === */
.modal {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.85);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  opacity: 0;
  pointer-events: none;
  transition: opacity 250ms;
  z-index: 1100;
}

.modal.active { opacity: 1; pointer-events: auto; }

.modal-panel {
  position: relative;
  width: 100%;
  max-width: 560px;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-top: 4px solid var(--red);
  padding: 2.5rem;
  transform: translateY(16px);
  transition: transform 300ms var(--ease);
}

.modal.active .modal-panel { transform: translateY(0); }

.close-btn { position: absolute; top: 0.75rem; right: 0.75rem; background: none; border: none; }

.modal-category { color: var(--gold); text-transform: uppercase; letter-spacing: 0.12em; font-size: 0.8rem; }
.modal-title { font-family: var(--font-display); font-size: 2.4rem; margin: 0.25rem 0 1rem; }
.modal-meta { display: flex; gap: 1.5rem; margin-bottom: 1.25rem; }
.modal-result { color: var(--red); font-weight: 700; }
.modal-quote { font-style: italic; color: var(--text-primary); border-left: 3px solid var(--red); padding-left: 1rem; margin: 1.5rem 0 0; }

.partner-modal .partner-card { border: none; padding: 0; cursor: default; }

/* === Contact & Footer === */
.contact-list { list-style: none; padding: 0; display: grid; gap: 0.75rem; font-size: 1.1rem; }
.contact-list a:hover { color: var(--red); }

.footer {
  max-width: none;
  padding: 2.5rem 2rem;
  border-top: 1px solid var(--ink-border);
  display: flex;
  justify-content: space-between;
  align-items: center;
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Scroll Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity 800ms var(--ease), transform 800ms var(--ease);
}

.reveal.active { opacity: 1; transform: none; }

/* === Mobile (<= 768px) === */
@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-toggle { display: flex; }
  section { padding: 4rem 1.25rem; }
  .timeline-svg { cursor: default; }
  .timeline-controls { inset: auto 0.5rem 0.5rem auto; }
  .modal { padding: 1rem; }
  .modal-panel { padding: 2rem 1.5rem; }
  .footer { flex-direction: column; gap: 1rem; }
}

@media print {
  .navbar, .sidebar-nav, .sidebar-overlay, .modal, .timeline-controls, .hero-actions { display: none !important; }
  .reveal { opacity: 1; transform: none; }
  body { background: #fff; color: #000; }
}
"#;
