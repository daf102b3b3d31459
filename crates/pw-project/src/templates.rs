//! Object templates: the standard make-up of stations and pipe runs.
//!
//! A template lists the components an object of that type is built from,
//! with default geometry. [`section_from_template`] turns one into a
//! complex section definition ready to be added to a project.

use crate::schema::{ComplexSectionDef, ComponentDef, ComponentKind, PlacementDef};
use crate::{ProjectError, ProjectResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Transported medium, selects the template catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FluidKind {
    Oil,
    Gas,
}

impl FluidKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oil => "oil",
            Self::Gas => "gas",
        }
    }
}

impl fmt::Display for FluidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FluidKind {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oil" => Ok(Self::Oil),
            "gas" => Ok(Self::Gas),
            other => Err(ProjectError::Template {
                what: format!("unknown fluid kind '{other}', expected oil or gas"),
            }),
        }
    }
}

/// Default geometry of a template component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TemplateShape {
    Pipe {
        length_m: f64,
        diameter_mm: f64,
        thickness_mm: f64,
    },
    Equipment {
        wall_thickness_mm: f64,
        count: u32,
        material: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub required: bool,
    pub shape: TemplateShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub components: &'static [ComponentTemplate],
}

impl ObjectTemplate {
    pub fn component(&self, id: &str) -> Option<&'static ComponentTemplate> {
        self.components.iter().find(|c| c.id == id)
    }
}

const fn pipe(
    id: &'static str,
    name: &'static str,
    required: bool,
    length_m: f64,
    diameter_mm: f64,
    thickness_mm: f64,
) -> ComponentTemplate {
    ComponentTemplate {
        id,
        name,
        required,
        shape: TemplateShape::Pipe {
            length_m,
            diameter_mm,
            thickness_mm,
        },
    }
}

const fn equipment(
    id: &'static str,
    name: &'static str,
    wall_thickness_mm: f64,
    count: u32,
    material: &'static str,
) -> ComponentTemplate {
    ComponentTemplate {
        id,
        name,
        required: true,
        shape: TemplateShape::Equipment {
            wall_thickness_mm,
            count,
            material,
        },
    }
}

static OIL_TEMPLATES: &[ObjectTemplate] = &[
    ObjectTemplate {
        id: "pump_station",
        name: "Насосная станция (НПС)",
        description: "Участок с насосами, фильтрами и резервуарами для перекачки нефти",
        components: &[
            pipe("pipe.main", "Магистральная труба", true, 50.0, 720.0, 12.0),
            pipe("pipe.medium", "Трубы между резервуарами", false, 120.0, 529.0, 10.0),
            equipment("pumps", "Насосы", 15.0, 3, "09Г2С"),
            equipment("filters", "Фильтры", 12.0, 2, "Ст20"),
            equipment("reservoirs", "Резервуары", 14.0, 4, "09Г2С"),
        ],
    },
    ObjectTemplate {
        id: "separator",
        name: "Отстойник/сепаратор",
        description: "Разделяет нефть, воду и механические примеси",
        components: &[
            pipe("dirty.oil", "Труба грязной нефти (вход)", true, 20.0, 426.0, 10.0),
            pipe("clean.oil", "Труба чистой нефти (выход)", true, 20.0, 426.0, 10.0),
            pipe("water", "Дренажная труба", true, 15.0, 219.0, 8.0),
            equipment("separator.base", "Корпус сепаратора", 16.0, 1, "09Г2С"),
        ],
    },
    ObjectTemplate {
        id: "heater",
        name: "Подогреватель",
        description: "Подогревает нефть для снижения вязкости",
        components: &[
            pipe("inlet.pipe", "Входная труба", true, 15.0, 426.0, 10.0),
            pipe("outlet.pipe", "Выходная труба", true, 15.0, 426.0, 10.0),
            equipment("heater.base", "Теплообменник", 12.0, 1, "X60"),
        ],
    },
    ObjectTemplate {
        id: "reservoir",
        name: "Резервуар",
        description: "Отдельный резервуар для хранения нефти",
        components: &[
            pipe("inlet.pipe", "Входная труба", true, 25.0, 529.0, 11.0),
            pipe("outlet.pipe", "Выходная труба", true, 25.0, 529.0, 11.0),
            equipment("reservoir.base", "Корпус резервуара", 14.0, 1, "09Г2С"),
        ],
    },
    ObjectTemplate {
        id: "pipe",
        name: "Труба",
        description: "Обычная надземная труба",
        components: &[pipe("pipe.paint", "Труба", true, 1000.0, 720.0, 10.0)],
    },
    ObjectTemplate {
        id: "pipe_underground",
        name: "Труба",
        description: "Труба, проложенная под землёй",
        components: &[pipe("pipe.underground", "Подземная труба", true, 1000.0, 720.0, 12.0)],
    },
];

static GAS_TEMPLATES: &[ObjectTemplate] = &[
    ObjectTemplate {
        id: "compressor_station",
        name: "Компрессорная станция (КС)",
        description: "Станция для сжатия газа и поддержания давления",
        components: &[
            pipe("pipe.main", "Магистральная труба", true, 60.0, 1020.0, 14.0),
            equipment("builds", "Компрессоры", 18.0, 4, "X60"),
        ],
    },
    ObjectTemplate {
        id: "grs",
        name: "Газораспределительная станция (ГРС)",
        description: "Распределяет газ потребителям с регулировкой давления",
        components: &[
            pipe("pipe.main", "Магистральная труба (вход)", true, 40.0, 1020.0, 13.0),
            pipe("big.consumer.pipe", "Труба к крупному потребителю", false, 200.0, 720.0, 11.0),
            pipe("medium.consumer.pipe", "Труба к среднему потребителю", false, 150.0, 530.0, 10.0),
            pipe("small.consumer.pipe", "Труба к мелкому потребителю", false, 100.0, 325.0, 8.0),
            equipment("filter", "Фильтр", 12.0, 2, "X52"),
            equipment("fork", "Разветвитель", 15.0, 1, "X60"),
        ],
    },
    ObjectTemplate {
        id: "dryer",
        name: "Осушитель",
        description: "Удаляет влагу из газа",
        components: &[
            pipe("inlet.pipe", "Входная труба", true, 20.0, 820.0, 12.0),
            pipe("outlet.pipe", "Выходная труба", true, 20.0, 820.0, 12.0),
            pipe("transition.pipe", "Переходная труба", false, 15.0, 630.0, 10.0),
            equipment("adsorbers", "Адсорберы", 14.0, 2, "X60"),
            equipment("separator", "Сепаратор", 16.0, 1, "X52"),
        ],
    },
    ObjectTemplate {
        id: "filter",
        name: "Фильтр",
        description: "Очистка газа от механических примесей",
        components: &[
            pipe("inlet.pipe", "Входная труба", true, 15.0, 630.0, 11.0),
            pipe("outlet.pipe", "Выходная труба", true, 15.0, 630.0, 11.0),
            equipment("filter.body", "Корпус фильтра", 12.0, 1, "X52"),
        ],
    },
    ObjectTemplate {
        id: "pipe",
        name: "Труба",
        description: "Обычная надземная труба",
        components: &[pipe("pipe.paint", "Труба", true, 1000.0, 1020.0, 13.0)],
    },
    ObjectTemplate {
        id: "pipe_underground",
        name: "Труба",
        description: "Труба, проложенная под землёй",
        components: &[pipe("pipe.underground", "Подземная труба", true, 1000.0, 1020.0, 15.0)],
    },
];

/// Object names used by early project files, mapped to template ids.
static LEGACY_NAMES: &[(&str, &str)] = &[
    ("НПС", "pump_station"),
    ("Отстойник", "separator"),
    ("Подогрев", "heater"),
    ("Резервуар", "reservoir"),
    ("КС", "compressor_station"),
    ("ГРС", "grs"),
    ("Осушитель", "dryer"),
    ("Фильтр", "filter"),
    ("Труба", "pipe"),
];

/// Standard pipe diameters and their recommended wall thickness, mm.
pub static PIPE_STANDARDS: &[(f64, f64)] = &[
    (159.0, 5.0),
    (219.0, 6.0),
    (273.0, 6.0),
    (325.0, 7.0),
    (377.0, 7.0),
    (426.0, 8.0),
    (478.0, 8.0),
    (529.0, 9.0),
    (630.0, 9.0),
    (720.0, 10.0),
    (820.0, 11.0),
    (920.0, 12.0),
    (1020.0, 13.0),
    (1220.0, 14.0),
    (1420.0, 15.0),
];

pub fn templates(fluid: FluidKind) -> &'static [ObjectTemplate] {
    match fluid {
        FluidKind::Oil => OIL_TEMPLATES,
        FluidKind::Gas => GAS_TEMPLATES,
    }
}

pub fn template(fluid: FluidKind, id: &str) -> Option<&'static ObjectTemplate> {
    templates(fluid).iter().find(|t| t.id == id)
}

pub fn component_template(
    fluid: FluidKind,
    template_id: &str,
    component_id: &str,
) -> Option<&'static ComponentTemplate> {
    template(fluid, template_id)?.component(component_id)
}

/// Material assumed for a component whose template names none.
pub fn default_material(fluid: FluidKind, is_pipe: bool) -> &'static str {
    match (fluid, is_pipe) {
        (FluidKind::Oil, true) => "Ст20",
        (FluidKind::Oil, false) => "09Г2С",
        (FluidKind::Gas, true) => "X60",
        (FluidKind::Gas, false) => "X52",
    }
}

/// Recommended wall thickness for a standard diameter; 10 mm otherwise.
pub fn recommended_thickness_mm(diameter_mm: f64) -> f64 {
    PIPE_STANDARDS
        .iter()
        .find(|(d, _)| *d == diameter_mm)
        .map(|(_, t)| *t)
        .unwrap_or(10.0)
}

/// Template id for an object name, accepting legacy Russian names.
/// Unknown names map to `"pipe"`.
pub fn resolve_template_id(fluid: FluidKind, name: &str) -> &'static str {
    if let Some(t) = template(fluid, name) {
        return t.id;
    }
    LEGACY_NAMES
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, id)| *id)
        .unwrap_or("pipe")
}

fn instantiate(fluid: FluidKind, t: &ComponentTemplate) -> ComponentDef {
    let (material, kind) = match t.shape {
        TemplateShape::Pipe {
            length_m,
            diameter_mm,
            thickness_mm,
        } => (
            default_material(fluid, true),
            ComponentKind::Pipe {
                length_m,
                diameter_mm,
                thickness_mm,
            },
        ),
        TemplateShape::Equipment {
            wall_thickness_mm,
            count,
            material,
        } => (
            material,
            ComponentKind::Equipment {
                wall_thickness_mm,
                count,
            },
        ),
    };
    ComponentDef {
        id: t.id.to_string(),
        name: t.name.to_string(),
        material: material.to_string(),
        kind,
        remaining_mm: None,
    }
}

/// Build a complex section from a template. Optional components are added
/// only when `include_optional` is set.
pub fn section_from_template(
    fluid: FluidKind,
    template_id: &str,
    name: &str,
    placement: PlacementDef,
    include_optional: bool,
) -> ProjectResult<ComplexSectionDef> {
    let t = template(fluid, template_id).ok_or_else(|| ProjectError::Template {
        what: format!("no {fluid} template '{template_id}'"),
    })?;
    Ok(ComplexSectionDef {
        name: name.to_string(),
        object_type: t.id.to_string(),
        placement,
        components: t
            .components
            .iter()
            .filter(|c| c.required || include_optional)
            .map(|c| instantiate(fluid, c))
            .collect(),
    })
}
