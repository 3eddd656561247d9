// ascii art logo

pub const PROFCHECK_LOGO: [&str; 4] = [
    r"                __       _           _    ",
    r" ___  _ _  ___ / _| ___ | |_  ___  __| |__",
    r"| . \| '_|/ . \|  _|/ ._>|   |/ ._>/ _| / /",
    r"|  _/|_|  \___/|_|  \___.|_|_|\___.\__|_\_\",
];
