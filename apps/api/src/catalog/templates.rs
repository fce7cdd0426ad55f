//! Pre-authored constellation graphs on the 1024 × 1024 reference canvas.

pub(super) struct TemplateDef {
    pub key: &'static str,
    pub name: &'static str,
    pub stars: &'static [(f64, f64)],
    pub edges: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub(super) static TEMPLATE_DEFS: &[TemplateDef] = &[
    TemplateDef {
        key: "orion",
        name: "Orion",
        stars: &[(300.0, 200.0), (700.0, 180.0), (350.0, 400.0), (512.0, 420.0), (650.0, 400.0),
                 (280.0, 750.0), (720.0, 780.0)],
        edges: &[(0, 2), (1, 4), (2, 3), (3, 4), (2, 5), (4, 6)],
    },
    TemplateDef {
        key: "cassiopeia",
        name: "Cassiopeia",
        stars: &[(150.0, 512.0), (350.0, 300.0), (512.0, 450.0), (670.0, 250.0), (870.0, 480.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4)],
    },
    TemplateDef {
        key: "ursa_major",
        name: "Ursa Major",
        stars: &[(200.0, 280.0), (320.0, 260.0), (450.0, 300.0), (550.0, 260.0), (800.0, 320.0),
                 (720.0, 580.0), (500.0, 550.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 3)],
    },
    TemplateDef {
        key: "pegasus",
        name: "Pegasus",
        stars: &[(220.0, 320.0), (780.0, 300.0), (800.0, 720.0), (260.0, 740.0), (520.0, 180.0),
                 (650.0, 220.0), (350.0, 550.0), (480.0, 620.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 5), (5, 4), (0, 6), (6, 7)],
    },
    TemplateDef {
        key: "cygnus",
        name: "Cygnus",
        stars: &[(512.0, 150.0), (512.0, 350.0), (512.0, 550.0), (512.0, 750.0), (250.0, 380.0),
                 (380.0, 320.0), (644.0, 320.0), (774.0, 380.0), (400.0, 600.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (4, 5), (5, 1), (1, 6), (6, 7), (2, 8)],
    },
    TemplateDef {
        key: "draco",
        name: "Draco",
        stars: &[(400.0, 800.0), (480.0, 720.0), (580.0, 650.0), (650.0, 550.0), (700.0, 420.0),
                 (680.0, 280.0), (580.0, 180.0), (450.0, 150.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)],
    },
    TemplateDef {
        key: "lyra",
        name: "Lyra",
        stars: &[(512.0, 200.0), (420.0, 350.0), (604.0, 350.0), (460.0, 520.0), (564.0, 520.0)],
        edges: &[(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)],
    },
    TemplateDef {
        key: "aquila",
        name: "Aquila",
        stars: &[(512.0, 250.0), (420.0, 380.0), (512.0, 450.0), (604.0, 380.0), (480.0, 620.0),
                 (512.0, 680.0), (544.0, 620.0)],
        edges: &[(0, 2), (1, 2), (2, 3), (2, 5), (4, 5), (5, 6)],
    },
    TemplateDef {
        key: "scorpius",
        name: "Scorpius",
        stars: &[(200.0, 400.0), (250.0, 500.0), (350.0, 450.0), (450.0, 420.0), (520.0, 450.0),
                 (580.0, 500.0), (650.0, 560.0), (700.0, 640.0), (730.0, 730.0), (780.0, 800.0),
                 (200.0, 300.0), (250.0, 350.0)],
        edges: &[(0, 2), (1, 2), (10, 2), (11, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7),
                 (7, 8), (8, 9)],
    },
    TemplateDef {
        key: "leo",
        name: "Leo",
        stars: &[(300.0, 350.0), (420.0, 320.0), (540.0, 280.0), (650.0, 320.0), (750.0, 400.0),
                 (700.0, 550.0), (780.0, 650.0), (480.0, 480.0), (380.0, 520.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (2, 7), (0, 8)],
    },
    TemplateDef {
        key: "andromeda",
        name: "Andromeda",
        stars: &[(300.0, 400.0), (420.0, 380.0), (560.0, 340.0), (680.0, 300.0), (400.0, 550.0),
                 (540.0, 520.0), (450.0, 700.0), (640.0, 680.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (1, 4), (4, 6), (2, 5), (5, 7)],
    },
    TemplateDef {
        key: "perseus",
        name: "Perseus",
        stars: &[(450.0, 200.0), (520.0, 320.0), (600.0, 420.0), (680.0, 520.0), (420.0, 400.0),
                 (350.0, 500.0), (480.0, 550.0), (440.0, 680.0), (560.0, 720.0), (520.0, 480.0)],
        edges: &[(0, 1), (1, 2), (2, 3), (1, 4), (4, 5), (1, 9), (9, 6), (6, 7), (6, 8)],
    },
    TemplateDef {
        key: "gemini",
        name: "Gemini",
        stars: &[(350.0, 250.0), (650.0, 230.0), (320.0, 380.0), (680.0, 360.0), (300.0, 550.0),
                 (700.0, 530.0), (280.0, 720.0), (720.0, 700.0)],
        edges: &[(0, 2), (2, 4), (4, 6), (1, 3), (3, 5), (5, 7), (2, 3)],
    },
];
