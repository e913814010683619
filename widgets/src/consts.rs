//! DOM contract, user-facing texts, and timings.

use contracts::Lookup;

use crate::state::cascade::{CascadeGroup, CascadeLabels, CascadeSpec};
use crate::state::visibility::{ConditionalField, GroupLocator, VisibilityRule};

// =============================================================
// Status change
// =============================================================

pub const STATUS_MODAL_ID: &str = "modalCambioEstado";
pub const STATUS_SELECT_ID: &str = "nuevoEstado";
pub const COMMENT_INPUT_ID: &str = "comentario";
pub const CONFIRM_BUTTON_ID: &str = "confirmarCambioEstado";
pub const STATUS_FORM_ID: &str = "formCambioEstado";
pub const STATUS_TRIGGER_SELECTOR: &str = ".cambiar-estado-btn[data-obs-id]";
pub const BADGE_TRIGGER_SELECTOR: &str = ".estado-badge[data-obs-id]";
pub const OBS_ID_ATTR: &str = "data-obs-id";
pub const CSRF_INPUT_SELECTOR: &str = "[name=csrfmiddlewaretoken]";
/// Added to `<body>` while the status dialog is open.
pub const MODAL_BODY_CLASS: &str = "dark-mode";

pub const MISSING_STATUS_MESSAGE: &str = "Debe seleccionar un estado";
pub const GENERIC_STATUS_FAILURE: &str = "Error al cambiar el estado";
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

// =============================================================
// Cascading selects
// =============================================================

pub const REGION_COMUNA: CascadeGroup = CascadeGroup {
    parent_id: "id_region",
    dependents: &[CascadeSpec {
        dependent_id: "id_comuna",
        lookup: Lookup::Comunas,
        labels: CascadeLabels {
            loading: "Cargando comunas...",
            placeholder: "Seleccionar comuna",
            error: "Error al cargar comunas",
        },
    }],
    require_all: true,
};

pub const PROYECTO_VIVIENDA_RECINTO: CascadeGroup = CascadeGroup {
    parent_id: "id_proyecto",
    dependents: &[
        CascadeSpec {
            dependent_id: "id_vivienda",
            lookup: Lookup::Viviendas,
            labels: CascadeLabels {
                loading: "Cargando viviendas...",
                placeholder: "Seleccionar vivienda",
                error: "Error al cargar viviendas",
            },
        },
        CascadeSpec {
            dependent_id: "id_recinto",
            lookup: Lookup::Recintos,
            labels: CascadeLabels {
                loading: "Cargando recintos...",
                placeholder: "Seleccionar recinto",
                error: "Error al cargar recintos",
            },
        },
    ],
    require_all: false,
};

pub const CASCADE_GROUPS: [CascadeGroup; 2] = [REGION_COMUNA, PROYECTO_VIVIENDA_RECINTO];

// =============================================================
// Theme
// =============================================================

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_TRANSITION: &str = "all 0.3s ease";
pub const THEME_TRANSITION_MS: u32 = 300;

// =============================================================
// Conditional fields
// =============================================================

const CONSTRUCTORA_RULE: VisibilityRule = VisibilityRule { markers: &["Constructora", "CONSTRUCTORA"] };

/// `id_constructora` follows the role select on both the user form and the
/// admin change form. Admin rows are tried first.
pub const CONSTRUCTORA_FIELD: ConditionalField = ConditionalField {
    controller_id: "id_rol",
    field_id: "id_constructora",
    locators: &[
        GroupLocator::Row {
            row: ".form-row.field-constructora, .field-constructora",
            closest: ".form-row, .field-constructora",
        },
        GroupLocator::FieldAncestor { selector: ".mb-3, .form-group, .col-md-6" },
    ],
    rule: CONSTRUCTORA_RULE,
};

// =============================================================
// Dashboard
// =============================================================

pub const CHART_CANVAS_ID: &str = "statusChart";
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";
pub const FLASH_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";
pub const FLASH_ALERT_TIMEOUT_MS: u32 = 5_000;
pub const METRIC_ANIMATION_MS: u32 = 1_000;
pub const METRIC_FRAME_MS: u32 = 16;
pub const DELETE_CONFIRM_DEFAULT: &str = "¿Estás seguro de que quieres eliminar este elemento?";
