use super::FundingTier::{High, Mid, MidHigh, Rural};
use super::{County, FundingTier, SchoolCorporation};

const fn corp(name: &'static str, tier: FundingTier, per_pupil: u32) -> SchoolCorporation {
    SchoolCorporation {
        name,
        tier,
        per_pupil,
    }
}

const fn county(name: &'static str, corporations: &'static [SchoolCorporation]) -> County {
    County { name, corporations }
}

// All 92 Indiana counties with school corporations. Per-pupil funding is
// estimated from district size and reported ADM funding (2026-27 values).
pub(crate) static COUNTIES: &[County] = &[
    county(
        "Adams",
        &[
            corp("South Adams Schools", Rural, 6800),
            corp("North Adams Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Allen",
        &[
            corp("Fort Wayne Community Schools", MidHigh, 7800),
            corp("East Allen County Schools", Mid, 7400),
            corp("Northwest Allen County Schools", Mid, 7400),
            corp("Southwest Allen County Schools", Mid, 7400),
        ],
    ),
    county(
        "Bartholomew",
        &[corp(
            "Bartholomew Consolidated School Corp (Columbus)",
            Mid,
            7400,
        )],
    ),
    county(
        "Benton",
        &[corp("Benton Community School Corp", Rural, 6800)],
    ),
    county(
        "Blackford",
        &[corp("Blackford County Schools", Rural, 6800)],
    ),
    county(
        "Boone",
        &[
            corp("Western Boone County Community Schools", Mid, 7400),
            corp("Zionsville Community Schools", High, 8200),
        ],
    ),
    county("Brown", &[corp("Brown County School Corp", Rural, 6800)]),
    county(
        "Carroll",
        &[
            corp("Carroll Consolidated School Corp", Rural, 6800),
            corp("Delphi Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Cass",
        &[
            corp("Logansport Community School Corp", Rural, 6800),
            corp("Pioneer Regional School Corp", Rural, 6800),
        ],
    ),
    county(
        "Clark",
        &[
            corp("Clarksville Community School Corp", Mid, 7400),
            corp("Greater Clark County Schools", Mid, 7400),
            corp("Silver Creek School Corp", Rural, 6800),
        ],
    ),
    county("Clay", &[corp("Clay Community Schools", Rural, 6800)]),
    county(
        "Clinton",
        &[
            corp("Clinton Prairie School Corp", Rural, 6800),
            corp("Frankfort Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Crawford",
        &[corp("Crawford County Consolidated School Corp", Rural, 6800)],
    ),
    county("Daviess", &[corp("Daviess County Schools", Rural, 6800)]),
    county(
        "Dearborn",
        &[
            corp("Lawrenceburg Community School Corp", Mid, 7400),
            corp("South Dearborn Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Decatur",
        &[corp("Decatur County Community Schools", Rural, 6800)],
    ),
    county(
        "DeKalb",
        &[
            corp("DeKalb County Central United School District", Rural, 6800),
            corp("DeKalb County Eastern Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Delaware",
        &[
            corp("Muncie Community Schools", MidHigh, 7800),
            corp("Delaware Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Dubois",
        &[
            corp("Dubois County Schools", Rural, 6800),
            corp("Northeast Dubois County School Corp", Rural, 6800),
        ],
    ),
    county(
        "Elkhart",
        &[
            corp("Elkhart Community Schools", MidHigh, 7800),
            corp("Goshen Community Schools", Mid, 7400),
            corp("Baugo Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Fayette",
        &[corp("Fayette County School Corp", Rural, 6800)],
    ),
    county(
        "Floyd",
        &[corp(
            "New Albany-Floyd County Consolidated Schools",
            Mid,
            7400,
        )],
    ),
    county(
        "Fountain",
        &[corp("Fountain County Schools", Rural, 6800)],
    ),
    county(
        "Franklin",
        &[corp("Franklin County Community School Corp", Rural, 6800)],
    ),
    county(
        "Fulton",
        &[
            corp("Rochester Community School Corp", Rural, 6800),
            corp("Caston School Corp", Rural, 6800),
        ],
    ),
    county(
        "Gibson",
        &[
            corp("Gibson County Schools", Rural, 6800),
            corp("South Gibson School Corp", Rural, 6800),
        ],
    ),
    county(
        "Grant",
        &[
            corp("Marion Community Schools", Mid, 7400),
            corp("Eastbrook Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Greene",
        &[
            corp("Linton-Stockton School Corp", Rural, 6800),
            corp("Shakamak Schools", Rural, 6800),
        ],
    ),
    county(
        "Hamilton",
        &[
            corp("Carmel Clay Schools", High, 8200),
            corp("Hamilton Southeastern Schools", High, 8200),
            corp("Westfield-Washington Schools", High, 8200),
            corp("Noblesville Schools", Mid, 7400),
            corp("Hamilton Heights School Corp", Rural, 6800),
        ],
    ),
    county(
        "Hancock",
        &[
            corp("Greenfield-Central Community Schools", Mid, 7400),
            corp("Mt Vernon Community School Corp (Hancock)", Mid, 7400),
        ],
    ),
    county(
        "Harrison",
        &[
            corp("Corydon Consolidated School Corp", Rural, 6800),
            corp("North Harrison Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Hendricks",
        &[
            corp("Avon Community School Corp", High, 8200),
            corp("Brownsburg Community School Corp", High, 8200),
            corp("Plainfield Community School Corp", High, 8200),
            corp("Danville Community School Corp", Mid, 7400),
        ],
    ),
    county(
        "Henry",
        &[
            corp("New Castle Community School Corp", Rural, 6800),
            corp("South Henry School Corp", Rural, 6800),
        ],
    ),
    county(
        "Howard",
        &[
            corp("Kokomo-Center Township Consolidated School Corp", Mid, 7400),
            corp("Northwestern School Corp (Howard)", Rural, 6800),
        ],
    ),
    county(
        "Huntington",
        &[corp(
            "Huntington County Community School Corp",
            Rural,
            6800,
        )],
    ),
    county(
        "Jackson",
        &[
            corp("Seymour Community Schools", Mid, 7400),
            corp("Brownstown Central Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Jasper",
        &[
            corp("Kankakee Valley School Corp", Rural, 6800),
            corp("Rensselaer Central School Corp", Rural, 6800),
        ],
    ),
    county("Jay", &[corp("Jay School Corp", Rural, 6800)]),
    county(
        "Jefferson",
        &[corp("Madison Consolidated Schools", Mid, 7400)],
    ),
    county(
        "Jennings",
        &[corp("Jennings County Schools", Rural, 6800)],
    ),
    county(
        "Johnson",
        &[
            corp("Center Grove Community School Corp", High, 8200),
            corp("Clark-Pleasant Community School Corp", Mid, 7400),
            corp("Franklin Community School Corp", Mid, 7400),
        ],
    ),
    county(
        "Knox",
        &[
            corp("South Knox School Corp", Rural, 6800),
            corp("Vincennes Community School Corp", Mid, 7400),
        ],
    ),
    county(
        "Kosciusko",
        &[
            corp("Warsaw Community Schools", Mid, 7400),
            corp("Wawasee Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "LaGrange",
        &[
            corp("Lakeland School Corp", Rural, 6800),
            corp("Prairie Heights Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Lake",
        &[
            corp("Hammond School City", MidHigh, 7800),
            corp("Gary Community School Corp", MidHigh, 7800),
            corp("Lake Central School Corp", Mid, 7400),
            corp("Merrillville Community School Corp", Mid, 7400),
        ],
    ),
    county(
        "LaPorte",
        &[
            corp("LaPorte Community School Corp", Mid, 7400),
            corp("Michigan City Area Schools", Mid, 7400),
        ],
    ),
    county(
        "Lawrence",
        &[
            corp("Mitchell Community Schools", Rural, 6800),
            corp("North Lawrence Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Madison",
        &[
            corp("Anderson Community School Corp", MidHigh, 7800),
            corp("Pendleton Heights Community School Corp", Mid, 7400),
        ],
    ),
    county(
        "Marion",
        &[
            corp("Indianapolis Public Schools (IPS)", MidHigh, 7800),
            corp("Lawrence Township Schools", Mid, 7400),
            corp("Washington Township Schools", Mid, 7400),
            corp("Perry Township Schools", Mid, 7400),
            corp("Wayne Township Schools (MSD)", Mid, 7400),
            corp("Pike Township Schools (MSD)", Mid, 7400),
            corp("Warren Township Schools (MSD)", Mid, 7400),
            corp("Franklin Township Community School Corp", Mid, 7400),
        ],
    ),
    county(
        "Marshall",
        &[
            corp("Plymouth Community School Corp", Rural, 6800),
            corp("Triton School Corp", Rural, 6800),
        ],
    ),
    county(
        "Martin",
        &[
            corp("Loogootee Community School Corp", Rural, 6800),
            corp("Shoals Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Miami",
        &[
            corp("Northwestern School Corp (Miami)", Rural, 6800),
            corp("Peru Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Monroe",
        &[corp(
            "Monroe County Community School Corp (Bloomington)",
            Mid,
            7400,
        )],
    ),
    county(
        "Montgomery",
        &[
            corp("Crawfordsville Community School Corp", Rural, 6800),
            corp("North Montgomery Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Morgan",
        &[
            corp("Martinsville Schools", Mid, 7400),
            corp("Mooresville Consolidated School Corp", Mid, 7400),
        ],
    ),
    county(
        "Newton",
        &[
            corp("South Newton School Corp", Rural, 6800),
            corp("North Newton School Corp", Rural, 6800),
        ],
    ),
    county(
        "Noble",
        &[
            corp("East Noble School Corp", Rural, 6800),
            corp("West Noble School Corp", Rural, 6800),
        ],
    ),
    county("Ohio", &[corp("Ohio County Schools", Rural, 6800)]),
    county(
        "Orange",
        &[
            corp("Orleans Community Schools", Rural, 6800),
            corp("Paoli Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Owen",
        &[corp("Spencer-Owen Community Schools", Rural, 6800)],
    ),
    county(
        "Parke",
        &[
            corp("Turkey Run Community School Corp", Rural, 6800),
            corp("Rockville Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Perry",
        &[corp("Tell City-Troy Township School Corp", Rural, 6800)],
    ),
    county("Pike", &[corp("Pike County School Corp", Rural, 6800)]),
    county(
        "Porter",
        &[
            corp("Portage Township Schools", Mid, 7400),
            corp("Valparaiso Community Schools", Mid, 7400),
            corp("Duneland School Corp", Mid, 7400),
        ],
    ),
    county(
        "Posey",
        &[
            corp("Mount Vernon Community School Corp (Posey)", Rural, 6800),
            corp("North Posey County Schools", Rural, 6800),
        ],
    ),
    county(
        "Pulaski",
        &[corp("Winamac Community School Corp", Rural, 6800)],
    ),
    county(
        "Putnam",
        &[
            corp("Greencastle Community School Corp", Rural, 6800),
            corp("South Putnam Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Randolph",
        &[
            corp("Monroe Central School Corp", Rural, 6800),
            corp("Randolph Eastern School Corp", Rural, 6800),
        ],
    ),
    county(
        "Ripley",
        &[
            corp("South Ripley Community School Corp", Rural, 6800),
            corp("Batesville Community School Corp", Rural, 6800),
        ],
    ),
    county("Rush", &[corp("Rush County Schools", Rural, 6800)]),
    county(
        "St. Joseph",
        &[
            corp("South Bend Community School Corp", MidHigh, 7800),
            corp("Penn-Harris-Madison School Corp", Mid, 7400),
            corp("Mishawaka School City", Mid, 7400),
        ],
    ),
    county(
        "Scott",
        &[
            corp("Scott County School District 1", Rural, 6800),
            corp("Scott County School District 2", Rural, 6800),
        ],
    ),
    county(
        "Shelby",
        &[
            corp("Shelbyville Central Schools", Mid, 7400),
            corp("Southwestern Consolidated School Corp (Shelby)", Rural, 6800),
        ],
    ),
    county(
        "Spencer",
        &[
            corp("North Spencer County School Corp", Rural, 6800),
            corp("South Spencer County School Corp", Rural, 6800),
        ],
    ),
    county(
        "Starke",
        &[
            corp("Knox Community School Corp", Rural, 6800),
            corp("Oregon-Davis School Corp", Rural, 6800),
        ],
    ),
    county(
        "Steuben",
        &[
            corp("Angola Community School Corp", Rural, 6800),
            corp("Fremont Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Sullivan",
        &[
            corp("Northeast School Corp (Sullivan)", Rural, 6800),
            corp("Sullivan County Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Switzerland",
        &[corp("Switzerland County School Corp", Rural, 6800)],
    ),
    county(
        "Tippecanoe",
        &[
            corp("Lafayette School Corp", MidHigh, 7800),
            corp("Tippecanoe School Corp", Mid, 7400),
            corp("West Lafayette Community School Corp", Mid, 7400),
        ],
    ),
    county(
        "Tipton",
        &[corp("Tipton Community School Corp", Rural, 6800)],
    ),
    county(
        "Union",
        &[corp(
            "Union County-College Corner Joint School District",
            Rural,
            6800,
        )],
    ),
    county(
        "Vanderburgh",
        &[corp("Evansville Vanderburgh School Corp", MidHigh, 7800)],
    ),
    county(
        "Vermillion",
        &[
            corp("South Vermillion Community School Corp", Rural, 6800),
            corp("North Vermillion Community School Corp", Rural, 6800),
        ],
    ),
    county(
        "Vigo",
        &[corp("Vigo County School Corp (Terre Haute)", MidHigh, 7800)],
    ),
    county(
        "Wabash",
        &[
            corp("Wabash City Schools", Rural, 6800),
            corp("MSD Wabash County Schools", Rural, 6800),
        ],
    ),
    county(
        "Warren",
        &[corp("Benton Central Jr-Sr High School", Rural, 6800)],
    ),
    county(
        "Warrick",
        &[corp("Warrick County School Corp", Mid, 7400)],
    ),
    county(
        "Washington",
        &[
            corp("Salem Community Schools", Rural, 6800),
            corp("West Washington School Corp", Rural, 6800),
        ],
    ),
    county(
        "Wayne",
        &[
            corp("Richmond Community Schools", Mid, 7400),
            corp("Centerville-Abington Community Schools", Rural, 6800),
        ],
    ),
    county(
        "Wells",
        &[
            corp("Bluffton-Harrison Metropolitan School District", Rural, 6800),
            corp("Southern Wells Community Schools", Rural, 6800),
        ],
    ),
    county(
        "White",
        &[
            corp("Frontier School Corp", Rural, 6800),
            corp("Twin Lakes School Corp", Rural, 6800),
        ],
    ),
    county(
        "Whitley",
        &[
            corp("Columbia City Joint Unified School Corp", Rural, 6800),
            corp("Whitko Community School Corp", Rural, 6800),
        ],
    ),
];
