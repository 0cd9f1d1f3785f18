mod generator_config;
