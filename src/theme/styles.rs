//! Global CSS styles for Rendezvous.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #fafafa;
  --surface-raised: #ffffff;
  --chip-grey: #e0e0e0;
  --danger: #FF4025;
  --add-hover: #006400;
  --text-primary: #212121;
  --text-muted: rgba(0, 0, 0, 0.54);

  --font-sans: 'Roboto', 'Helvetica Neue', Arial, sans-serif;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

.muted { color: var(--text-muted); }
.fatal { padding: 2rem; color: var(--danger); }

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.5rem;
  background: var(--surface-raised);
  border-bottom: 1px solid var(--chip-grey);
}
.app-name { font-weight: 600; margin-right: 0.75rem; }
.event-name { color: var(--text-muted); }
.nav-links { display: flex; gap: 1rem; }
.nav-link { color: var(--text-muted); text-decoration: none; }
.nav-link.active { color: var(--text-primary); font-weight: 600; }

/* === Pages === */
.page { padding: 1.5rem; }
.page-title { font-size: 1.5rem; margin-bottom: 0.25rem; }
.event-summary { margin-bottom: 1.5rem; }
.event-columns { display: flex; gap: 1.5rem; align-items: flex-start; }
.debug-toggle { display: block; margin-top: 1.5rem; font-size: 0.875rem; }

/* === Participants List === */
.participants-list { min-width: 300px; }
.participants-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}
.participants-title { font-size: 1.125rem; font-weight: 500; }
.participants-error {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.5rem 0.75rem;
  margin-bottom: 0.75rem;
  border-radius: 4px;
  background: rgba(255, 64, 37, 0.1);
  color: var(--danger);
}
.guests-container { display: flex; flex-direction: column; gap: 0.5rem; }

/* === Chips === */
.chip {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.25rem 0.5rem 0.25rem 0.25rem;
  border-radius: 24px;
  background: var(--chip-grey);
}
.chip-hover { transition: background var(--transition-fast); cursor: default; }
.chip-hover:hover { background: #cfd8dc; }
.chip-text { display: flex; flex-direction: column; flex-grow: 100; }
.chip-name { font-size: 0.875rem; }
.chip-status { font-size: 0.75rem; color: var(--text-muted); }
.chip-delete {
  border: none;
  background: transparent;
  font-size: 1.25rem;
  color: var(--text-muted);
  cursor: pointer;
}
.chip-delete:hover { color: var(--danger); }

.avatar {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  object-fit: cover;
}
.avatar-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  background: #bdbdbd;
  color: #ffffff;
  font-weight: 500;
}

/* === Buttons === */
.btn-primary, .btn-danger, .btn-ghost {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 2px;
  background: transparent;
  text-transform: uppercase;
  cursor: pointer;
}
.btn-primary { color: #00bcd4; }
.btn-danger { color: var(--danger); }
.btn-ghost { color: var(--text-muted); }
button:disabled { opacity: 0.5; cursor: not-allowed; }

.icon-btn { border: none; background: transparent; cursor: pointer; font-size: 1.25rem; }
.add-guest-btn {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  background: var(--chip-grey);
  color: #ffffff;
  font-size: 1.5rem;
  transition: background var(--transition-fast);
}
.add-guest-btn:hover { background: var(--add-hover); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.54);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
}
.delete-guest-modal {
  width: 22%;
  min-width: 300px;
  background: var(--surface-raised);
  border-radius: 2px;
  overflow: hidden;
}
.modal-title.danger {
  background: var(--danger);
  color: #ffffff;
  font-size: 1.5rem;
  padding: 0.5rem 1.5rem;
}
.modal-body { padding: 1rem 1.5rem; font-size: 1.125rem; }
.modal-busy { padding: 0 1.5rem; color: var(--text-muted); }
.modal-actions { display: flex; justify-content: flex-end; padding: 0.5rem; }

/* === Invite Drawer === */
.invite-drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: 320px;
  padding: 1.5rem;
  background: var(--surface-raised);
  box-shadow: -2px 0 8px rgba(0, 0, 0, 0.15);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}
.drawer-header { display: flex; justify-content: space-between; align-items: center; }
.drawer-input { padding: 0.5rem; border: 1px solid var(--chip-grey); border-radius: 2px; }

/* === Availability Panel === */
.availability-panel {
  flex: 1;
  padding: 1rem;
  border: 1px solid var(--chip-grey);
  border-radius: 4px;
  background: var(--surface-raised);
}
.panel-title { font-size: 1rem; margin-bottom: 0.5rem; }
.availability-panel ul { list-style: none; font-size: 0.875rem; }
"#;
