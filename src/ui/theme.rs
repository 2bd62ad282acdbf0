//! Shared Tailwind class strings so panels and inputs look the same on
//! every section of the page.

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40 p-6";

pub const SECTION_TITLE: &str =
    "flex items-center gap-2 border-b border-slate-800 pb-4 mb-6 text-lg font-semibold text-slate-100";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const SUB_LABEL: &str = "mt-1 text-xs text-slate-500";

pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";

pub const INPUT_SUFFIX: &str = "pointer-events-none absolute inset-y-0 right-3 flex items-center text-xs text-slate-500";

pub const BTN_GHOST: &str = "rounded-full border border-slate-700 px-4 py-2 text-sm font-medium text-slate-300 transition hover:border-slate-500 hover:text-slate-100";
