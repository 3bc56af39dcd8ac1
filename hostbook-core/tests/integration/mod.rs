mod config_dir_tests;
